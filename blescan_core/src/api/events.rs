use crate::{FailureKind, ScanResult};

/// One platform callback, as handed to a [`ScanCallback`](crate::ScanCallback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    SingleResult(ScanResult),
    BatchResult(Vec<ScanResult>),
    Failure(FailureKind),
}
impl From<ScanResult> for ScanEvent {
    fn from(value: ScanResult) -> Self {
        Self::SingleResult(value)
    }
}
impl From<Vec<ScanResult>> for ScanEvent {
    fn from(value: Vec<ScanResult>) -> Self {
        Self::BatchResult(value)
    }
}
impl From<FailureKind> for ScanEvent {
    fn from(value: FailureKind) -> Self {
        Self::Failure(value)
    }
}
