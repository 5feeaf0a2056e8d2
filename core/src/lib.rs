pub mod chat;
pub mod context;
pub mod eggs;
pub mod events;
pub mod game_data;
pub mod host;
pub mod plugin;
pub mod round;
pub mod state;
pub mod timers;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use bassault_types::{Color, PluginConfig, egg_colors};
pub use chat::{ChatMessageType, QueuedMessage};
pub use context::{ConfigError, PluginConfigExt};
pub use eggs::{EggColor, EggLocationCount, EggTracker};
pub use events::{EventKind, HostEvent, PluginSignal, SignalHandler};
pub use host::{ChatSink, Client, MenuEntry, WorldPoint};
pub use plugin::BarbarianAssaultPlugin;
pub use round::{Role, Round, RoundTracker};
pub use state::{CollectionStats, START_WAVE};
pub use timers::{Clock, GameTimer, ManualClock, SystemClock, format_duration};
