use std::sync::Arc;

use flume::{Sender, TrySendError};
use tokio::select;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::{BlescanError, BlescanResult, Context, FailureKind, ScanCallback, ScanEvent, ScanResult};

/// Platform-side handle feeding callbacks into a dispatch task.
///
/// Never blocks the caller: when the task lags behind by more than the
/// configured capacity the event is dropped and `send` reports `Lagged`, and
/// once the task is gone every event is dropped with `ChannelClosed`. The
/// callback-shaped wrappers swallow both.
#[derive(Debug, Clone)]
pub struct ScanFeed {
    tx: Sender<ScanEvent>,
}
impl ScanFeed {
    pub fn send(&self, event: ScanEvent) -> BlescanResult<()> {
        match self.tx.try_send(event) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(event)) => {
                warn!("Dispatcher lagging, dropped {:?}", event);
                Err(BlescanError::Lagged())
            }
            Err(TrySendError::Disconnected(event)) => {
                debug!("Scan stopped, ignoring {:?}", event);
                Err(BlescanError::ChannelClosed())
            }
        }
    }
    pub fn single_result(&self, result: ScanResult) {
        let _ = self.send(result.into());
    }
    pub fn batch_results(&self, results: Vec<ScanResult>) {
        let _ = self.send(results.into());
    }
    pub fn scan_failed(&self, code: i32) {
        let _ = self.send(FailureKind::from_code(code).into());
    }
    pub fn is_closed(&self) -> bool {
        self.tx.is_disconnected()
    }
}

/// Spawns the task that hands every fed event to `callback`, one at a time and
/// in the order they were fed, until `context` is shut down.
pub fn spawn_dispatch<C: ScanCallback + 'static>(context: &Context, callback: Arc<C>) -> ScanFeed {
    let (tx, rx) = flume::bounded(context.config.event_capacity);
    let cancel = context.child_token();
    context.spawn(
        async move {
            loop {
                select! {
                    _ = cancel.cancelled() => {
                        // events accepted before the stop are still handled
                        while let Ok(event) = rx.try_recv() {
                            callback.handle(&event);
                        }
                        break;
                    }
                    event = rx.recv_async() => match event {
                        Ok(event) => callback.handle(&event),
                        Err(_) => break,
                    },
                }
            }
            info!("Closing scan dispatch");
        }
        .instrument(info_span!("scan_dispatch")),
    );
    ScanFeed { tx }
}
