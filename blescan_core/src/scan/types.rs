use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanMode {
    LowPower,
    Balanced,
    LowLatency,
}
impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LowPower => "low-power",
            Self::Balanced => "balanced",
            Self::LowLatency => "low-latency",
        };
        f.write_str(name)
    }
}

/// Matches advertisements listing one specific 128-bit service UUID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ServiceFilter {
    service: Uuid,
}
impl ServiceFilter {
    pub fn new(service: Uuid) -> Self {
        Self { service }
    }
    pub fn service(&self) -> Uuid {
        self.service
    }
}

/// Settings handed to the platform when a scan starts. Built once per scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScanConfiguration {
    mode: ScanMode,
    filter: ServiceFilter,
}
impl ScanConfiguration {
    pub fn new(mode: ScanMode, filter: ServiceFilter) -> Self {
        Self { mode, filter }
    }
    pub fn mode(&self) -> ScanMode {
        self.mode
    }
    pub fn filter(&self) -> ServiceFilter {
        self.filter
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanResult {
    pub address: String,
    pub rssi: i16,
    /// Raw advertisement, as a sequence of length/type/data structures.
    pub payload: Bytes,
}
impl ScanResult {
    pub fn new(address: impl Into<String>, rssi: i16, payload: impl Into<Bytes>) -> Self {
        Self {
            address: address.into(),
            rssi,
            payload: payload.into(),
        }
    }
}

/// Re-encodes advertisement data keyed by AD type as length/type/data
/// structures, ordered by AD type. Entries too long for one structure are
/// skipped.
pub fn encode_ad_structures<'a, I>(structures: I) -> Bytes
where
    I: IntoIterator<Item = (u8, &'a [u8])>,
{
    let mut sorted: Vec<(u8, &[u8])> = structures.into_iter().collect();
    sorted.sort_by_key(|(ad_type, _)| *ad_type);
    let mut buf = BytesMut::new();
    for (ad_type, data) in sorted {
        let Ok(len) = u8::try_from(data.len() + 1) else {
            continue;
        };
        buf.put_u8(len);
        buf.put_u8(ad_type);
        buf.extend_from_slice(data);
    }
    buf.freeze()
}
