use std::sync::Arc;

mod config;
pub use config::*;
mod config_resolver;
pub use config_resolver::*;
mod options;
pub use options::*;
mod plugin_driver;
pub use plugin_driver::*;
mod utils;

// public exports

pub type ConfigResult<T> = packlet_error::Result<T>;
pub type ConfigError = packlet_error::Error;
pub type WarningHandler = Arc<dyn Fn(ConfigError) + Send + Sync>;
