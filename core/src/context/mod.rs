mod config;
mod error;

pub use config::{APP_NAME, PluginConfig, PluginConfigExt};
pub use error::ConfigError;
