use std::time::Duration;

use bassault_types::Color;
use chrono::NaiveDateTime;

use crate::eggs::EggColor;
use crate::host::WorldPoint;
use crate::round::Role;

/// Signals emitted by the plugin after handling a host event.
/// These describe what changed, for overlays and other consumers that
/// should not own plugin state.
#[derive(Debug, Clone, PartialEq)]
pub enum PluginSignal {
    // Timer lifecycle
    GameStarted {
        timestamp: NaiveDateTime,
    },
    /// A wave banner was parsed. `timed` is false when no game timer was
    /// running to take the checkpoint.
    WaveStarted {
        wave: String,
        timed: bool,
        timestamp: NaiveDateTime,
    },
    WaveEnded {
        wave: String,
        duration: Duration,
        timestamp: NaiveDateTime,
    },
    GameFinished {
        duration: Duration,
        timestamp: NaiveDateTime,
    },

    // Round state
    RoundAssigned {
        role: Role,
    },
    RoundCleared {
        role: Role,
    },
    InGameEntered {
        timestamp: NaiveDateTime,
    },

    // Collector
    EggSpawned {
        color: EggColor,
        position: WorldPoint,
        /// Eggs of this color now on the tile
        count: u32,
    },
    MenuEntryHighlighted {
        target: String,
        color: Color,
    },
}

impl PluginSignal {
    pub fn name(&self) -> &'static str {
        match self {
            PluginSignal::GameStarted { .. } => "GameStarted",
            PluginSignal::WaveStarted { .. } => "WaveStarted",
            PluginSignal::WaveEnded { .. } => "WaveEnded",
            PluginSignal::GameFinished { .. } => "GameFinished",
            PluginSignal::RoundAssigned { .. } => "RoundAssigned",
            PluginSignal::RoundCleared { .. } => "RoundCleared",
            PluginSignal::InGameEntered { .. } => "InGameEntered",
            PluginSignal::EggSpawned { .. } => "EggSpawned",
            PluginSignal::MenuEntryHighlighted { .. } => "MenuEntryHighlighted",
        }
    }
}
