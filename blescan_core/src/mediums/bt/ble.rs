use std::time::Duration;

use bluer::{
    monitor::{
        data_type::COMPLETE_LIST_128_BIT_SERVICE_CLASS_UUIDS, Monitor, Pattern,
        RssiSamplingPeriod,
    },
    Device, ErrorKind,
};
use tracing::info;

use crate::{
    encode_ad_structures, BlescanResult, FailureKind, ScanConfiguration, ScanMode, ScanResult,
};

pub fn monitor_for(config: &ScanConfiguration) -> Monitor {
    let pattern = Pattern {
        data_type: COMPLETE_LIST_128_BIT_SERVICE_CLASS_UUIDS,
        start_position: 0x00,
        content: config.filter().service().to_bytes_le().to_vec(),
    };
    info!("Scanning for {:?} in {} mode", pattern, config.mode());
    let sampling = match config.mode() {
        ScanMode::LowLatency => RssiSamplingPeriod::All,
        ScanMode::Balanced => RssiSamplingPeriod::Period(Duration::from_secs(1)),
        ScanMode::LowPower => RssiSamplingPeriod::First,
    };
    Monitor {
        monitor_type: bluer::monitor::Type::OrPatterns,
        rssi_low_threshold: None,
        rssi_high_threshold: None,
        rssi_low_timeout: None,
        rssi_high_timeout: None,
        rssi_sampling_period: Some(sampling),
        patterns: Some(vec![pattern]),
        ..Default::default()
    }
}

/// The platform scan-failure code equivalent to a BlueZ error.
pub fn failure_code(err: &bluer::Error) -> i32 {
    let kind = match err.kind {
        ErrorKind::AlreadyExists | ErrorKind::InProgress => FailureKind::AlreadyStarted,
        ErrorKind::NotAuthorized | ErrorKind::NotPermitted => FailureKind::RegistrationFailed,
        ErrorKind::NotSupported => FailureKind::FeatureUnsupported,
        _ => FailureKind::InternalError,
    };
    kind.code()
}

pub(super) async fn read_result(device: &Device) -> BlescanResult<ScanResult> {
    let rssi = device.rssi().await?.unwrap_or_default();
    let payload = match device.advertising_data().await? {
        Some(data) => encode_ad_structures(data.iter().map(|(ty, d)| (*ty, d.as_slice()))),
        None => Default::default(),
    };
    Ok(ScanResult::new(device.address().to_string(), rssi, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_scan_configuration, build_service_filter, SERVICE_UUID};

    #[test]
    fn monitor_matches_service() {
        let monitor = monitor_for(&build_scan_configuration());
        let patterns = monitor.patterns.expect("patterns set");
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].content, SERVICE_UUID.to_bytes_le().to_vec());
        assert_eq!(patterns[0].data_type, COMPLETE_LIST_128_BIT_SERVICE_CLASS_UUIDS);
    }

    #[test]
    fn low_power_samples_first() {
        let config = ScanConfiguration::new(ScanMode::LowPower, build_service_filter());
        let monitor = monitor_for(&config);
        assert!(matches!(
            monitor.rssi_sampling_period,
            Some(RssiSamplingPeriod::First)
        ));
    }
}
