mod ble;
mod manager;
pub use ble::{failure_code, monitor_for};
pub use manager::Bluetooth;
