use thiserror::Error;
#[derive(Error, Debug)]
pub enum BlescanError {
    #[cfg(feature = "bluez")]
    #[error("Bluetooth Error")]
    Bluetooth {
        #[from]
        source: bluer::Error,
    },
    #[error("Adapter {0} not found")]
    AdapterNotFound(String),
    #[error("Scan already running")]
    AlreadyScanning(),
    #[error("Dispatcher lagging, event dropped")]
    Lagged(),
    #[error("Event channel closed")]
    ChannelClosed(),
}
pub type BlescanResult<T> = Result<T, BlescanError>;
