use uuid::{uuid, Uuid};
pub const SERVICE_UUID: Uuid = uuid!("a06c6ab8-886f-4d56-82fc-2cf8610d6664");
/// Tracing target every scan event line is emitted under.
pub const SCAN_TARGET: &str = "blescan::scan";
pub const DEFAULT_EVENT_CAPACITY: usize = 64;
