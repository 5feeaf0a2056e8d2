//! Event-kind to handler routing.
//!
//! Each [`EventKind`] maps to at most one handler. Registering a kind twice
//! replaces the earlier handler.

use chrono::NaiveDateTime;
use hashbrown::HashMap;

use crate::host::{ChatSink, Client};
use crate::state::PluginState;

use super::{EventKind, HostEvent, PluginSignal};

/// Host collaborators for the duration of one event
pub struct HostContext<'a> {
    pub client: &'a mut dyn Client,
    pub chat: &'a mut dyn ChatSink,
    /// Time the event is being handled at
    pub now: NaiveDateTime,
}

pub type EventHandlerFn = fn(&mut PluginState, &HostEvent, &mut HostContext<'_>) -> Vec<PluginSignal>;

#[derive(Default)]
pub struct EventRegistry {
    handlers: HashMap<EventKind, EventHandlerFn>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: EventKind, handler: EventHandlerFn) {
        if self.handlers.insert(kind, handler).is_some() {
            tracing::debug!(?kind, "replaced event handler");
        }
    }

    pub fn is_registered(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route `event` to its handler. Unregistered kinds produce no signals.
    pub fn dispatch(
        &self,
        state: &mut PluginState,
        event: &HostEvent,
        ctx: &mut HostContext<'_>,
    ) -> Vec<PluginSignal> {
        match self.handlers.get(&event.kind()) {
            Some(handler) => handler(state, event, ctx),
            None => Vec::new(),
        }
    }
}
