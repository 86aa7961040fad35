use tracing::{error, info};

use super::{FailureKind, ScanCallback, ScanConfiguration, ScanMode, ScanResult, ServiceFilter};
use crate::core::consts::{SCAN_TARGET, SERVICE_UUID};

pub fn build_scan_configuration() -> ScanConfiguration {
    ScanConfiguration::new(ScanMode::LowLatency, build_service_filter())
}
pub fn build_service_filter() -> ServiceFilter {
    ServiceFilter::new(SERVICE_UUID)
}

/// Logs every scan callback and classifies scan failures.
///
/// Holds only the configuration the scan was started with, so it can be
/// shared across threads and will accept callbacks that arrive after the
/// scan has been stopped.
#[derive(Debug, Clone)]
pub struct ScanDispatcher {
    config: ScanConfiguration,
}
impl Default for ScanDispatcher {
    fn default() -> Self {
        Self::new(build_scan_configuration())
    }
}
impl ScanDispatcher {
    pub fn new(config: ScanConfiguration) -> Self {
        Self { config }
    }
    pub fn config(&self) -> &ScanConfiguration {
        &self.config
    }
}
impl ScanCallback for ScanDispatcher {
    fn on_single_result(&self, result: &ScanResult) {
        info!(
            target: SCAN_TARGET,
            addr = %result.address,
            rssi = result.rssi,
            payload = %hex::encode(&result.payload),
            "new result"
        );
    }
    fn on_failure(&self, kind: FailureKind) {
        error!(target: SCAN_TARGET, code = kind.code(), "error scanning {}", kind);
    }
}
