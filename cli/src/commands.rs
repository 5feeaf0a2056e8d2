//! Replay commands
//!
//! Each line of input is one subcommand. Commands either change the
//! simulated host (widget text, instance flag, clock) or deliver an event
//! to the plugin, or both.

use std::time::Duration;

use bassault_core::game_data::{Varbit, WidgetInfo, item_id, widget_group};
use bassault_core::{
    ChatMessageType, EggColor, HostEvent, MenuEntry, PluginConfig, PluginConfigExt, WorldPoint,
};
use clap::{Parser, Subcommand, ValueEnum};

use crate::CliContext;
use crate::error::ReplayError;

#[derive(Parser)]
#[command(version, about = "Barbarian Assault event replay")]
struct ReplLine {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the plugin (subscribes to events)
    Start,
    /// Shut the plugin down, discarding session state
    Stop,
    /// Move the clock forward
    Advance {
        #[arg(short, long)]
        secs: u64,
        #[arg(short, long, default_value_t = 0)]
        ms: u64,
    },
    /// Set whether the player is inside an instanced region
    Instance {
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Set the text of a host widget (no event is sent)
    WidgetText {
        #[arg(short, long, value_enum)]
        widget: WidgetArg,
        #[arg(short, long, allow_hyphen_values = true)]
        text: String,
    },
    ClearWidget {
        #[arg(short, long, value_enum)]
        widget: WidgetArg,
    },
    /// Send a widget-loaded event
    LoadGroup {
        #[arg(short, long, value_enum)]
        group: WidgetArg,
    },
    /// Send a chat message event
    Chat {
        #[arg(short, long, allow_hyphen_values = true)]
        text: String,
        #[arg(short, long, value_enum, default_value_t = ChatKind::Game)]
        kind: ChatKind,
    },
    /// Set the in-game indicator and send a variable-changed event
    Var {
        #[arg(short, long)]
        value: i32,
    },
    /// Send an item-spawned event
    Spawn {
        #[arg(short, long, value_enum)]
        item: ItemArg,
        #[arg(short)]
        x: i32,
        #[arg(short)]
        y: i32,
        #[arg(short, long, default_value_t = 0)]
        plane: i32,
    },
    /// Append a menu entry and send a menu-entry-added event
    Menu {
        #[arg(short, long, allow_hyphen_values = true)]
        option: String,
        #[arg(short, long, allow_hyphen_values = true)]
        target: String,
    },
    ClearMenu,
    /// Change (and optionally persist) the plugin toggles
    Config {
        #[arg(long)]
        wave_times: Option<bool>,
        #[arg(long)]
        highlight: Option<bool>,
        #[arg(long)]
        save: bool,
    },
    Status,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WidgetArg {
    Attacker,
    Defender,
    Healer,
    Collector,
    Reward,
}

impl WidgetArg {
    fn text_widget(self) -> WidgetInfo {
        match self {
            WidgetArg::Attacker => WidgetInfo::AttackerListenText,
            WidgetArg::Defender => WidgetInfo::DefenderListenText,
            WidgetArg::Healer => WidgetInfo::HealerListenText,
            WidgetArg::Collector => WidgetInfo::CollectorListenText,
            WidgetArg::Reward => WidgetInfo::RewardText,
        }
    }

    fn group_id(self) -> i32 {
        match self {
            WidgetArg::Attacker => widget_group::ATTACKER,
            WidgetArg::Defender => widget_group::DEFENDER,
            WidgetArg::Healer => widget_group::HEALER,
            WidgetArg::Collector => widget_group::COLLECTOR,
            WidgetArg::Reward => widget_group::REWARD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChatKind {
    Game,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ItemArg {
    RedEgg,
    GreenEgg,
    BlueEgg,
    YellowEgg,
    Tofu,
    Crackers,
    Worms,
}

impl ItemArg {
    fn item_id(self) -> i32 {
        match self {
            ItemArg::RedEgg => item_id::RED_EGG,
            ItemArg::GreenEgg => item_id::GREEN_EGG,
            ItemArg::BlueEgg => item_id::BLUE_EGG,
            ItemArg::YellowEgg => item_id::YELLOW_EGG,
            ItemArg::Tofu => item_id::TOFU,
            ItemArg::Crackers => item_id::CRACKERS,
            ItemArg::Worms => item_id::WORMS,
        }
    }
}

/// Output of one command
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Response {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }
}

/// Parse one input line and run it
pub fn respond(line: &str, ctx: &mut CliContext) -> Result<Response, ReplayError> {
    let mut args = shlex::split(line).ok_or(ReplayError::Quoting)?;
    args.insert(0, "bassault".to_string());
    let repl_line = ReplLine::try_parse_from(args).map_err(|e| ReplayError::Command(e.to_string()))?;

    match repl_line.command {
        Some(command) => execute(command, ctx),
        None => Ok(Response::default()),
    }
}

pub fn execute(command: Command, ctx: &mut CliContext) -> Result<Response, ReplayError> {
    let lines = match command {
        Command::Start => {
            ctx.plugin.start_up();
            vec!["plugin started".to_string()]
        }
        Command::Stop => {
            ctx.plugin.shut_down();
            vec!["plugin stopped".to_string()]
        }
        Command::Advance { secs, ms } => {
            Duration::from_secs(secs)
                .checked_add(Duration::from_millis(ms))
                .and_then(|by| ctx.clock.advance(by))
                .ok_or(ReplayError::ClockOutOfRange { secs, ms })?;
            Vec::new()
        }
        Command::Instance { state } => {
            ctx.client.set_in_instance(state == Toggle::On);
            Vec::new()
        }
        Command::WidgetText { widget, text } => {
            ctx.client.set_widget_text(widget.text_widget(), text);
            Vec::new()
        }
        Command::ClearWidget { widget } => {
            ctx.client.clear_widget(widget.text_widget());
            Vec::new()
        }
        Command::LoadGroup { group } => ctx.fire(HostEvent::WidgetLoaded {
            group_id: group.group_id(),
        }),
        Command::Chat { text, kind } => {
            let kind = match kind {
                ChatKind::Game => ChatMessageType::GameMessage,
                ChatKind::Public => ChatMessageType::Public,
            };
            ctx.fire(HostEvent::ChatMessage {
                kind,
                message: text,
            })
        }
        Command::Var { value } => {
            ctx.client.set_var(Varbit::InGameBa, value);
            ctx.fire(HostEvent::VarbitChanged)
        }
        Command::Spawn { item, x, y, plane } => ctx.fire(HostEvent::ItemSpawned {
            item_id: item.item_id(),
            position: WorldPoint::new(x, y, plane),
        }),
        Command::Menu { option, target } => {
            ctx.client
                .push_menu_entry(MenuEntry::new(option.clone(), target.clone()));
            let mut lines = ctx.fire(HostEvent::MenuEntryAdded { option, target });
            if let Some(last) = ctx.client.menu().last() {
                lines.push(format!("menu: {} {}", last.option, last.target));
            }
            lines
        }
        Command::ClearMenu => {
            ctx.client.clear_menu();
            Vec::new()
        }
        Command::Config {
            wave_times,
            highlight,
            save,
        } => update_config(ctx, wave_times, highlight, save)?,
        Command::Status => status(ctx),
        Command::Exit => {
            return Ok(Response {
                lines: vec!["quitting...".to_string()],
                quit: true,
            });
        }
    };

    Ok(Response::lines(lines))
}

fn update_config(
    ctx: &mut CliContext,
    wave_times: Option<bool>,
    highlight: Option<bool>,
    save: bool,
) -> Result<Vec<String>, ReplayError> {
    let mut config: PluginConfig = *ctx.plugin.config();
    if let Some(wave_times) = wave_times {
        config.wave_times = wave_times;
    }
    if let Some(highlight) = highlight {
        config.highlight_collector_eggs = highlight;
    }
    ctx.plugin.set_config(config);
    if save {
        config.store()?;
    }

    Ok(vec![format!(
        "wave_times={} highlight_collector_eggs={}",
        config.wave_times, config.highlight_collector_eggs
    )])
}

fn status(ctx: &CliContext) -> Vec<String> {
    let plugin = &ctx.plugin;
    let mut lines = Vec::new();

    lines.push(format!("started: {}", plugin.is_started()));
    lines.push(format!("wave: {}", plugin.current_wave()));
    match (plugin.elapsed_text(true), plugin.elapsed_text(false)) {
        (Some(game), Some(wave)) => lines.push(format!("timer: game {game}, wave {wave}")),
        _ => lines.push("timer: none".to_string()),
    }
    match plugin.current_round() {
        Some(round) => lines.push(format!("role: {}", round.role().name())),
        None => lines.push("role: none".to_string()),
    }
    lines.push(format!(
        "call: {}",
        plugin
            .collector_heard_call(&ctx.client)
            .unwrap_or_else(|| "none".to_string())
    ));
    for color in EggColor::ALL {
        let map = plugin.egg_map(color);
        let eggs: u32 = map.values().sum();
        lines.push(format!("{} eggs: {} on {} tiles", color.name(), eggs, map.len()));
    }

    let stats = plugin.stats();
    lines.push(format!(
        "collected: {} ({} wrong), healed: {}",
        stats.collected_egg_count, stats.wrong_eggs, stats.hp_healed
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use bassault_core::Clock;
    use chrono::NaiveDate;

    fn test_context() -> CliContext {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let mut ctx = CliContext::starting_at(PluginConfig::default(), start);
        ctx.plugin.start_up();
        ctx
    }

    fn run(ctx: &mut CliContext, line: &str) -> Vec<String> {
        respond(line, ctx).unwrap().lines
    }

    #[test]
    fn wave_end_prints_duration() {
        let mut ctx = test_context();
        run(&mut ctx, "instance on");
        run(&mut ctx, "var --value 1");
        run(&mut ctx, "chat --text '---- Wave: 1 started'");
        run(&mut ctx, "advance --secs 42 --ms 900");

        let lines = run(&mut ctx, "var --value 0");
        assert_eq!(lines, vec!["Wave 1 duration: 00:42".to_string()]);
    }

    #[test]
    fn collector_menu_is_recolored() {
        let mut ctx = test_context();
        run(&mut ctx, "load-group --group collector");
        run(&mut ctx, "widget-text --widget collector --text 'Green eggs'");

        let lines = run(&mut ctx, "menu --option Take --target '<col=ff9040>Green egg'");
        assert_eq!(lines, vec!["menu: Take <col=00ff00>Green egg".to_string()]);
    }

    #[test]
    fn status_reports_eggs() {
        let mut ctx = test_context();
        run(&mut ctx, "spawn --item red-egg -x 10 -y 20");
        run(&mut ctx, "spawn --item red-egg -x 10 -y 20");
        run(&mut ctx, "spawn --item tofu -x 10 -y 20");

        let lines = run(&mut ctx, "status");
        assert!(lines.contains(&"Red eggs: 2 on 1 tiles".to_string()));
        assert!(lines.contains(&"timer: none".to_string()));
    }

    #[test]
    fn bad_input_is_reported() {
        let mut ctx = test_context();
        assert!(matches!(
            respond("chat --text 'unterminated", &mut ctx),
            Err(ReplayError::Quoting)
        ));
        assert!(matches!(
            respond("spawn --item purple-egg -x 1 -y 1", &mut ctx),
            Err(ReplayError::Command(_))
        ));
    }

    #[test]
    fn exit_quits() {
        let mut ctx = test_context();
        assert!(respond("exit", &mut ctx).unwrap().quit);
        assert_eq!(respond("", &mut ctx).unwrap(), Response::default());
    }

    #[test]
    fn advance_past_clock_range_is_rejected() {
        let mut ctx = test_context();
        let before = ctx.clock.now();

        assert!(matches!(
            respond("advance --secs 18446744073709551", &mut ctx),
            Err(ReplayError::ClockOutOfRange { .. })
        ));
        assert!(matches!(
            respond("advance --secs 9000000000000", &mut ctx),
            Err(ReplayError::ClockOutOfRange { .. })
        ));
        assert!(matches!(
            respond("advance --secs 18446744073709551615 --ms 1000", &mut ctx),
            Err(ReplayError::ClockOutOfRange { .. })
        ));
        assert_eq!(ctx.clock.now(), before);
    }
}
