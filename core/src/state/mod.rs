mod in_game;
mod stats;

pub use in_game::{InGameFlag, InGameTransition};
pub use stats::CollectionStats;

use bassault_types::PluginConfig;

use crate::eggs::EggTracker;
use crate::round::RoundTracker;
use crate::timers::GameTimer;

/// Wave label of the first wave of a game
pub const START_WAVE: &str = "1";

/// Pure storage for everything the plugin tracks.
/// Routing logic lives in the event handlers.
#[derive(Debug)]
pub struct PluginState {
    pub config: PluginConfig,
    pub rounds: RoundTracker,
    pub eggs: EggTracker,
    /// `None` while no game is being timed
    pub game_timer: Option<GameTimer>,
    /// Most recently parsed wave label
    pub current_wave: String,
    pub in_game: InGameFlag,
    pub stats: CollectionStats,
}

impl PluginState {
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config,
            rounds: RoundTracker::new(),
            eggs: EggTracker::new(),
            game_timer: None,
            current_wave: START_WAVE.to_string(),
            in_game: InGameFlag::default(),
            stats: CollectionStats::default(),
        }
    }

    /// Drop per-session state. Config and lifetime totals survive.
    pub fn reset(&mut self) {
        self.rounds.clear();
        self.eggs.clear();
        self.game_timer = None;
        self.current_wave = START_WAVE.to_string();
        self.in_game = InGameFlag::default();
        self.stats.reset_round();
    }
}
