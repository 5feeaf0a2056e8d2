use bassault_core::{
    BarbarianAssaultPlugin, HostEvent, ManualClock, PluginConfig, PluginSignal, QueuedMessage,
    SignalHandler,
};
use chrono::{Local, NaiveDateTime};

use crate::host::ScriptedClient;

/// Holds all state for one replay session: the plugin, the simulated host
/// and the clock both share.
pub struct CliContext {
    pub plugin: BarbarianAssaultPlugin,
    pub client: ScriptedClient,
    pub clock: ManualClock,
    chat: Vec<QueuedMessage>,
}

impl CliContext {
    pub fn new(config: PluginConfig) -> Self {
        Self::starting_at(config, Local::now().naive_local())
    }

    pub fn starting_at(config: PluginConfig, start: NaiveDateTime) -> Self {
        let clock = ManualClock::new(start);
        Self {
            plugin: BarbarianAssaultPlugin::with_clock(config, Box::new(clock.clone())),
            client: ScriptedClient::new(),
            clock,
            chat: Vec::new(),
        }
    }

    /// Deliver one event and collect the chat lines it produced
    pub fn fire(&mut self, event: HostEvent) -> Vec<String> {
        let signals = self
            .plugin
            .handle_event(&event, &mut self.client, &mut self.chat);
        SignalLogger.handle_signals(&signals);

        self.chat
            .drain(..)
            .map(|message| message.plain_text())
            .collect()
    }
}

/// Logs every signal at debug level
struct SignalLogger;

impl SignalHandler for SignalLogger {
    fn handle_signal(&mut self, signal: &PluginSignal) {
        tracing::debug!(signal = signal.name(), details = ?signal, "plugin signal");
    }
}
