//! Per-event handlers registered by the plugin on start-up.
//!
//! Each handler owns exactly one event kind and ignores events of any other
//! shape.

use std::time::Duration;

use crate::chat::{ChatColorType, ChatMessageBuilder, ChatMessageType, QueuedMessage};
use crate::eggs::highlight_menu_entry;
use crate::events::{HostContext, HostEvent, PluginSignal};
use crate::game_data::{Varbit, WidgetInfo, widget_group};
use crate::host::ChatSink;
use crate::round::Role;
use crate::state::{InGameTransition, PluginState, START_WAVE};
use crate::timers::{GameTimer, format_duration};

/// Game messages announcing a wave start begin with this
pub const WAVE_MESSAGE_PREFIX: &str = "---- Wave:";
/// The reward screen after the final wave contains this marker
pub const ENDGAME_REWARD_NEEDLE: &str = "<br>5";
/// Whitespace-separated token index of the wave label
const WAVE_NUM_INDEX: usize = 2;

pub(super) fn on_widget_loaded(
    state: &mut PluginState,
    event: &HostEvent,
    ctx: &mut HostContext<'_>,
) -> Vec<PluginSignal> {
    let HostEvent::WidgetLoaded { group_id } = *event else {
        return Vec::new();
    };

    if group_id == widget_group::REWARD {
        return check_game_finished(state, ctx);
    }

    let Some(role) = Role::from_group_id(group_id) else {
        return Vec::new();
    };

    if state.rounds.assign(role) {
        tracing::debug!(?role, "round started");
        vec![PluginSignal::RoundAssigned { role }]
    } else {
        Vec::new()
    }
}

fn check_game_finished(state: &mut PluginState, ctx: &mut HostContext<'_>) -> Vec<PluginSignal> {
    let finished = ctx
        .client
        .widget_text(WidgetInfo::RewardText)
        .is_some_and(|text| text.contains(ENDGAME_REWARD_NEEDLE));
    if !finished {
        return Vec::new();
    }

    let Some(timer) = state.game_timer.take() else {
        return Vec::new();
    };

    let duration = timer.elapsed(ctx.now, true);
    tracing::info!(duration = %format_duration(duration), "game finished");
    if state.config.wave_times {
        announce_time(ctx.chat, "Game finished, duration: ", duration);
    }

    vec![PluginSignal::GameFinished {
        duration,
        timestamp: ctx.now,
    }]
}

pub(super) fn on_chat_message(
    state: &mut PluginState,
    event: &HostEvent,
    ctx: &mut HostContext<'_>,
) -> Vec<PluginSignal> {
    let HostEvent::ChatMessage { kind, message } = event else {
        return Vec::new();
    };
    if *kind != ChatMessageType::GameMessage || !message.starts_with(WAVE_MESSAGE_PREFIX) {
        return Vec::new();
    }

    let Some(wave) = message.split_whitespace().nth(WAVE_NUM_INDEX) else {
        tracing::warn!(%message, "wave message without a wave number");
        return Vec::new();
    };
    state.current_wave = wave.to_string();

    let mut signals = Vec::new();
    let timed = if wave == START_WAVE {
        state.game_timer = Some(GameTimer::start(ctx.now));
        signals.push(PluginSignal::GameStarted { timestamp: ctx.now });
        true
    } else if let Some(timer) = state.game_timer.as_mut() {
        timer.mark_wave_start(ctx.now);
        true
    } else {
        false
    };

    tracing::debug!(wave, timed, "wave started");
    signals.push(PluginSignal::WaveStarted {
        wave: wave.to_string(),
        timed,
        timestamp: ctx.now,
    });
    signals
}

pub(super) fn on_varbit_changed(
    state: &mut PluginState,
    event: &HostEvent,
    ctx: &mut HostContext<'_>,
) -> Vec<PluginSignal> {
    if !matches!(event, HostEvent::VarbitChanged) {
        return Vec::new();
    }

    let in_game = ctx.client.var(Varbit::InGameBa);
    match state.in_game.update(in_game) {
        Some(InGameTransition::Left) => on_left_game(state, ctx),
        Some(InGameTransition::Entered) => {
            vec![PluginSignal::InGameEntered { timestamp: ctx.now }]
        }
        None => Vec::new(),
    }
}

fn on_left_game(state: &mut PluginState, ctx: &mut HostContext<'_>) -> Vec<PluginSignal> {
    let mut signals = Vec::new();

    if let Some(role) = state.rounds.clear() {
        tracing::debug!(?role, "round ended");
        signals.push(PluginSignal::RoundCleared { role });
    }

    // Tutorials flip the bit back only after leaving the instance, while a
    // real wave ends with the player still inside it.
    if !ctx.client.is_in_instanced_region() {
        return signals;
    }

    let Some(timer) = state.game_timer.take() else {
        return signals;
    };

    let duration = timer.elapsed(ctx.now, false);
    tracing::info!(wave = %state.current_wave, duration = %format_duration(duration), "wave ended");
    if state.config.wave_times {
        let label = format!("Wave {} duration: ", state.current_wave);
        announce_time(ctx.chat, &label, duration);
    }

    signals.push(PluginSignal::WaveEnded {
        wave: state.current_wave.clone(),
        duration,
        timestamp: ctx.now,
    });
    signals
}

pub(super) fn on_item_spawned(
    state: &mut PluginState,
    event: &HostEvent,
    _ctx: &mut HostContext<'_>,
) -> Vec<PluginSignal> {
    let HostEvent::ItemSpawned { item_id, position } = *event else {
        return Vec::new();
    };

    match state.eggs.record_item(item_id, position) {
        Some((color, count)) => vec![PluginSignal::EggSpawned {
            color,
            position,
            count,
        }],
        None => Vec::new(),
    }
}

pub(super) fn on_menu_entry_added(
    state: &mut PluginState,
    event: &HostEvent,
    ctx: &mut HostContext<'_>,
) -> Vec<PluginSignal> {
    let HostEvent::MenuEntryAdded { option, target } = event else {
        return Vec::new();
    };

    match highlight_menu_entry(&state.config, &state.rounds, ctx.client, option, target) {
        Some(highlight) => vec![PluginSignal::MenuEntryHighlighted {
            target: highlight.target,
            color: highlight.color,
        }],
        None => Vec::new(),
    }
}

fn announce_time(chat: &mut dyn ChatSink, pre_text: &str, duration: Duration) {
    let message = ChatMessageBuilder::new()
        .color(ChatColorType::Normal)
        .append(pre_text)
        .color(ChatColorType::Highlight)
        .append(&format_duration(duration))
        .build();

    chat.queue(QueuedMessage::console(message));
}
