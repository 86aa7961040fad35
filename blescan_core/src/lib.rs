mod api;
mod core;
#[cfg(feature = "bluez")]
mod mediums;
pub(crate) mod runner;
mod scan;
pub use crate::core::{
    consts::{DEFAULT_EVENT_CAPACITY, SCAN_TARGET, SERVICE_UUID},
    BlescanError, BlescanResult, Config,
};
pub use api::events::ScanEvent;
#[cfg(feature = "bluez")]
pub use mediums::bt::{failure_code, monitor_for, Bluetooth};
pub use runner::{context::Context, feed::spawn_dispatch, feed::ScanFeed};
pub use scan::{
    build_scan_configuration, build_service_filter, encode_ad_structures, FailureKind, ScanCallback,
    ScanConfiguration, ScanDispatcher, ScanMode, ScanResult, ServiceFilter,
};
