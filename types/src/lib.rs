//! Shared configuration types for the Barbarian Assault assistant
//!
//! This crate contains serializable types shared between the event core
//! (bassault-core) and the replay driver (bassault-cli).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Color Type
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color
pub type Color = [u8; 4];

// ─────────────────────────────────────────────────────────────────────────────
// Plugin Config
// ─────────────────────────────────────────────────────────────────────────────

/// User-facing toggles. Supplied by the host's configuration store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Announce wave and game durations in chat
    #[serde(default = "default_true")]
    pub wave_times: bool,
    /// Highlight the called egg's "Take" menu entries while playing collector
    #[serde(default = "default_true")]
    pub highlight_collector_eggs: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            wave_times: true,
            highlight_collector_eggs: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Default Color Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Display colors used when highlighting egg menu entries
pub mod egg_colors {
    use super::Color;

    pub const RED: Color = [255, 0, 0, 255];
    pub const GREEN: Color = [0, 255, 0, 255];
    pub const CYAN: Color = [0, 255, 255, 255]; // blue eggs
    pub const YELLOW: Color = [255, 255, 0, 255];
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde Default Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_enabled() {
        let config: PluginConfig = toml::from_str("wave_times = false").unwrap();
        assert!(!config.wave_times);
        assert!(config.highlight_collector_eggs);
    }

    #[test]
    fn empty_document_is_default() {
        let config: PluginConfig = toml::from_str("").unwrap();
        assert_eq!(config, PluginConfig::default());
    }
}
