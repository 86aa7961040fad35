use crate::{FailureKind, ScanEvent, ScanResult};

/// Receives the callbacks a platform BLE scanner produces.
///
/// Calls arrive one at a time, though not necessarily on the same thread.
pub trait ScanCallback: Send + Sync {
    fn on_single_result(&self, result: &ScanResult);
    /// Delayed reports are delivered in the order the platform batched them.
    fn on_batch_results(&self, results: &[ScanResult]) {
        for result in results {
            self.on_single_result(result);
        }
    }
    /// Classifies a raw platform code and reports it through [`on_failure`](Self::on_failure).
    fn on_scan_failed(&self, code: i32) -> FailureKind {
        let kind = FailureKind::from_code(code);
        self.on_failure(kind);
        kind
    }
    /// Reports an already classified failure as is.
    fn on_failure(&self, kind: FailureKind);
    fn handle(&self, event: &ScanEvent) {
        match event {
            ScanEvent::SingleResult(result) => self.on_single_result(result),
            ScanEvent::BatchResult(results) => self.on_batch_results(results),
            ScanEvent::Failure(kind) => self.on_failure(*kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<String>>,
        failures: Mutex<Vec<FailureKind>>,
    }
    impl ScanCallback for Recorder {
        fn on_single_result(&self, result: &ScanResult) {
            self.seen.lock().unwrap().push(result.address.clone());
        }
        fn on_failure(&self, kind: FailureKind) {
            self.failures.lock().unwrap().push(kind);
        }
    }

    fn result(address: &str) -> ScanResult {
        ScanResult::new(address, -60, vec![0x02, 0x01, 0x06])
    }

    #[test]
    fn batch_preserves_order() {
        let recorder = Recorder::default();
        let batch = vec![result("r1"), result("r2"), result("r3")];
        recorder.on_batch_results(&batch);
        assert_eq!(*recorder.seen.lock().unwrap(), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn empty_batch_is_a_noop() {
        let recorder = Recorder::default();
        recorder.on_batch_results(&[]);
        assert!(recorder.seen.lock().unwrap().is_empty());
        assert!(recorder.failures.lock().unwrap().is_empty());
    }

    #[test]
    fn handle_routes_each_variant() {
        let recorder = Recorder::default();
        recorder.handle(&ScanEvent::SingleResult(result("a")));
        recorder.handle(&ScanEvent::BatchResult(vec![result("b"), result("c")]));
        recorder.handle(&ScanEvent::Failure(FailureKind::Unknown(42)));
        assert_eq!(*recorder.seen.lock().unwrap(), vec!["a", "b", "c"]);
        assert_eq!(
            *recorder.failures.lock().unwrap(),
            vec![FailureKind::Unknown(42)]
        );
    }

    #[test]
    fn scan_failed_classifies_raw_code() {
        let recorder = Recorder::default();
        assert_eq!(recorder.on_scan_failed(4), FailureKind::FeatureUnsupported);
        assert_eq!(recorder.on_scan_failed(7), FailureKind::Unknown(7));
        assert_eq!(
            *recorder.failures.lock().unwrap(),
            vec![FailureKind::FeatureUnsupported, FailureKind::Unknown(7)]
        );
    }

    #[test]
    fn handle_keeps_classified_failure() {
        let recorder = Recorder::default();
        for code in 1..=4 {
            recorder.handle(&ScanEvent::Failure(FailureKind::Unknown(code)));
        }
        assert_eq!(
            *recorder.failures.lock().unwrap(),
            (1..=4).map(FailureKind::Unknown).collect::<Vec<_>>()
        );
    }
}
