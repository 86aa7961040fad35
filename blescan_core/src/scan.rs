mod callback;
mod dispatcher;
mod failure;
mod types;
pub use callback::ScanCallback;
pub use dispatcher::{build_scan_configuration, build_service_filter, ScanDispatcher};
pub use failure::FailureKind;
pub use types::{encode_ad_structures, ScanConfiguration, ScanMode, ScanResult, ServiceFilter};
