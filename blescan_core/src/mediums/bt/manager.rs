use bluer::{
    monitor::{MonitorEvent, MonitorHandle, MonitorManager},
    Adapter, Session,
};
use futures::StreamExt;
use tokio::select;
use tracing::{info, trace, warn};

use super::ble::{failure_code, monitor_for, read_result};
use crate::{BlescanError, BlescanResult, Context, FailureKind, ScanConfiguration, ScanFeed};

/// Scans through the BlueZ advertisement monitor API.
pub struct Bluetooth {
    _session: Session,
    adapter: Adapter,
    context: Context,
    monitor_manager: Option<MonitorManager>,
}
impl Bluetooth {
    pub async fn new(context: &Context) -> BlescanResult<Self> {
        let session = bluer::Session::new().await?;
        let adapter = match &context.config.adapter {
            Some(name) => session
                .adapter(name)
                .map_err(|_| BlescanError::AdapterNotFound(name.clone()))?,
            None => session.default_adapter().await?,
        };
        adapter.set_powered(true).await?;
        Ok(Self {
            _session: session,
            adapter,
            context: context.clone(),
            monitor_manager: None,
        })
    }
    async fn register(
        &self,
        config: &ScanConfiguration,
    ) -> bluer::Result<(MonitorManager, MonitorHandle)> {
        let mm = self.adapter.monitor().await?;
        let handle = mm.register(monitor_for(config)).await?;
        Ok((mm, handle))
    }
    /// Registers a monitor for `config` and forwards every matching device to
    /// `feed` until the context is shut down. A failed registration is also
    /// reported through `feed`.
    pub async fn scan(&mut self, config: &ScanConfiguration, feed: ScanFeed) -> BlescanResult<()> {
        if self.monitor_manager.is_some() {
            feed.scan_failed(FailureKind::AlreadyStarted.code());
            return Err(BlescanError::AlreadyScanning());
        }
        let (mm, mut monitor_handle) = match self.register(config).await {
            Ok(registered) => registered,
            Err(err) => {
                feed.scan_failed(failure_code(&err));
                return Err(err.into());
            }
        };
        self.monitor_manager = Some(mm);
        info!("Scanning BLE on {}", self.adapter.name());
        let adapter = self.adapter.clone();
        let cancel = self.context.child_token();
        self.context.spawn(async move {
            loop {
                select! {
                    _ = cancel.cancelled() => break,
                    event = monitor_handle.next() => match event {
                        Some(MonitorEvent::DeviceFound(devid)) => {
                            trace!("Discovered device {:?}", devid);
                            let result = match adapter.device(devid.device) {
                                Ok(dev) => read_result(&dev).await,
                                Err(err) => Err(err.into()),
                            };
                            match result {
                                Ok(result) => feed.single_result(result),
                                Err(err) => warn!("Reading {} failed: {}", devid.device, err),
                            }
                        }
                        Some(event) => trace!("{:?}", event),
                        None => break,
                    },
                }
            }
            info!("Closing BLE scan");
        });
        Ok(())
    }
}
