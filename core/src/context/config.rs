//! Plugin configuration
//!
//! This module re-exports the shared config type from bassault-types and
//! provides persistence for it.

pub use bassault_types::PluginConfig;

use super::ConfigError;

/// Application name used for the config directory
pub const APP_NAME: &str = "bassault";
const CONFIG_NAME: &str = "config";

/// Extension trait for PluginConfig persistence
pub trait PluginConfigExt: Sized {
    /// Load the stored config, falling back to defaults on any error
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn store(&self) -> Result<(), ConfigError>;
}

impl PluginConfigExt for PluginConfig {
    fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "using default configuration");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self, ConfigError> {
        confy::load(APP_NAME, CONFIG_NAME).map_err(ConfigError::Load)
    }

    fn store(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, *self).map_err(ConfigError::Save)
    }
}
