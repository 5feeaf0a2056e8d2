//! Event dispatch facade.
//!
//! `BarbarianAssaultPlugin` owns all plugin state for its lifetime. The host
//! calls [`start_up`](BarbarianAssaultPlugin::start_up) once, then delivers
//! events one at a time through
//! [`handle_event`](BarbarianAssaultPlugin::handle_event), and finally calls
//! [`shut_down`](BarbarianAssaultPlugin::shut_down).

mod handlers;


use bassault_types::PluginConfig;

use crate::eggs::{self, EggColor, EggLocationCount};
use crate::events::{EventKind, EventRegistry, HostContext, HostEvent, PluginSignal};
use crate::game_data::{ItemId, WidgetInfo, listen_item_id};
use crate::host::{ChatSink, Client, WorldPoint};
use crate::round::Round;
use crate::state::{CollectionStats, PluginState};
use crate::timers::{Clock, GameTimer, SystemClock};

pub use handlers::{ENDGAME_REWARD_NEEDLE, WAVE_MESSAGE_PREFIX};

pub struct BarbarianAssaultPlugin {
    state: PluginState,
    registry: EventRegistry,
    clock: Box<dyn Clock>,
    started: bool,
}

impl BarbarianAssaultPlugin {
    pub fn new(config: PluginConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: PluginConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            state: PluginState::new(config),
            registry: EventRegistry::new(),
            clock,
            started: false,
        }
    }

    // --- Lifecycle ---

    /// Allocate fresh state and subscribe to the host events.
    pub fn start_up(&mut self) {
        if self.started {
            tracing::debug!("start_up called while already running");
            return;
        }
        let config = self.state.config;
        let stats = self.state.stats;
        self.state = PluginState::new(config);
        self.state.stats = stats;

        self.registry.register(EventKind::WidgetLoaded, handlers::on_widget_loaded);
        self.registry.register(EventKind::ChatMessage, handlers::on_chat_message);
        self.registry.register(EventKind::VarbitChanged, handlers::on_varbit_changed);
        self.registry.register(EventKind::ItemSpawned, handlers::on_item_spawned);
        self.registry.register(EventKind::MenuEntryAdded, handlers::on_menu_entry_added);

        self.started = true;
        tracing::info!("Barbarian Assault plugin started");
    }

    /// Drop the timer, round, eggs and round counters and stop handling events.
    pub fn shut_down(&mut self) {
        self.registry.clear();
        self.state.reset();
        self.started = false;
        tracing::info!("Barbarian Assault plugin stopped");
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    // --- Dispatch ---

    /// Route one host event to its handler.
    ///
    /// Returns the signals describing what changed. Events delivered before
    /// `start_up` (or after `shut_down`) are ignored.
    pub fn handle_event(
        &mut self,
        event: &HostEvent,
        client: &mut dyn Client,
        chat: &mut dyn ChatSink,
    ) -> Vec<PluginSignal> {
        if !self.started {
            return Vec::new();
        }

        let mut ctx = HostContext {
            client,
            chat,
            now: self.clock.now(),
        };
        self.registry.dispatch(&mut self.state, event, &mut ctx)
    }

    // --- Configuration ---

    pub fn config(&self) -> &PluginConfig {
        &self.state.config
    }

    pub fn set_config(&mut self, config: PluginConfig) {
        self.state.config = config;
    }

    // --- Overlay accessors ---

    pub fn current_round(&self) -> Option<&Round> {
        self.state.rounds.current()
    }

    pub fn current_wave(&self) -> &str {
        &self.state.current_wave
    }

    pub fn game_timer(&self) -> Option<&GameTimer> {
        self.state.game_timer.as_ref()
    }

    /// Formatted time since the game (`true`) or current wave (`false`) began
    pub fn elapsed_text(&self, since_game_start: bool) -> Option<String> {
        let now = self.clock.now();
        self.state
            .game_timer
            .as_ref()
            .map(|timer| timer.format_elapsed(now, since_game_start))
    }

    pub fn egg_map(&self, color: EggColor) -> &EggLocationCount {
        self.state.eggs.map(color)
    }

    pub fn red_eggs(&self) -> &EggLocationCount {
        self.state.eggs.red_eggs()
    }

    pub fn green_eggs(&self) -> &EggLocationCount {
        self.state.eggs.green_eggs()
    }

    pub fn blue_eggs(&self) -> &EggLocationCount {
        self.state.eggs.blue_eggs()
    }

    pub fn yellow_eggs(&self) -> &EggLocationCount {
        self.state.eggs.yellow_eggs()
    }

    pub fn stats(&self) -> &CollectionStats {
        &self.state.stats
    }

    pub fn stats_mut(&mut self) -> &mut CollectionStats {
        &mut self.state.stats
    }

    // --- Host queries ---

    pub fn collector_heard_call(&self, client: &dyn Client) -> Option<String> {
        eggs::collector_heard_call(client)
    }

    pub fn called_egg_map(&self, client: &dyn Client) -> Option<&EggLocationCount> {
        eggs::called_egg_map(client, &self.state.eggs)
    }

    /// Item a healer/defender listen widget is asking for
    pub fn listen_item_id(&self, client: &dyn Client, widget: WidgetInfo) -> Option<ItemId> {
        client
            .widget_text(widget)
            .and_then(|call| listen_item_id(&call))
    }

    /// Whether `point` is the local player's tile
    pub fn is_under_player(&self, client: &dyn Client, point: WorldPoint) -> bool {
        client
            .local_player_location()
            .is_some_and(|location| location == point)
    }
}
