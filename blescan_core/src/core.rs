mod config;
pub(crate) mod consts;
mod errors;
pub use config::Config;
pub use errors::{BlescanError, BlescanResult};
