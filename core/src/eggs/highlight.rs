//! Collector menu highlighting.
//!
//! The host appends each new menu entry and then notifies, so the entry the
//! event describes is always the last one in the list.

use bassault_types::{Color, PluginConfig, egg_colors};

use crate::chat::{prepend_color_tag, strip_leading_tag};
use crate::host::Client;
use crate::round::{Role, RoundTracker};

use super::{EggColor, called_color};

const TAKE_OPTION: &str = "Take";

/// A rewritten menu target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuHighlight {
    pub target: String,
    pub color: Color,
}

/// Highlight color for a cleaned option/target pair
pub fn highlight_color(called: Option<EggColor>, option: &str, target: &str) -> Option<Color> {
    if option != TAKE_OPTION {
        return None;
    }

    match called {
        Some(color) if target.starts_with(color.item_name()) => Some(color.display_color()),
        _ if target == EggColor::Yellow.item_name() => Some(egg_colors::YELLOW),
        _ => None,
    }
}

/// Recolor the newest menu entry if it takes the called (or a yellow) egg.
///
/// No-op unless highlighting is enabled and the active round is a collector
/// round. `option` and `target` are the raw strings from the event.
pub fn highlight_menu_entry(
    config: &PluginConfig,
    rounds: &RoundTracker,
    client: &mut dyn Client,
    option: &str,
    target: &str,
) -> Option<MenuHighlight> {
    if !config.highlight_collector_eggs || !rounds.is_role(Role::Collector) {
        return None;
    }

    let target_clean = strip_leading_tag(target);
    let option_clean = strip_leading_tag(option);
    let color = highlight_color(called_color(&*client), option_clean, target_clean)?;

    let mut entries = client.menu_entries();
    let last = entries.last_mut()?;
    last.target = prepend_color_tag(target_clean, color);
    let highlighted = last.target.clone();
    client.set_menu_entries(entries);

    Some(MenuHighlight {
        target: highlighted,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn called_color_matches_prefix() {
        assert_eq!(
            highlight_color(Some(EggColor::Red), "Take", "Red egg"),
            Some(egg_colors::RED)
        );
        assert_eq!(
            highlight_color(Some(EggColor::Blue), "Take", "Blue egg"),
            Some(egg_colors::CYAN)
        );
        assert_eq!(highlight_color(Some(EggColor::Red), "Take", "Green egg"), None);
    }

    #[test]
    fn yellow_ignores_the_call() {
        for called in [None, Some(EggColor::Red), Some(EggColor::Blue)] {
            assert_eq!(
                highlight_color(called, "Take", "Yellow egg"),
                Some(egg_colors::YELLOW)
            );
        }
    }

    #[test]
    fn only_take_is_highlighted() {
        assert_eq!(highlight_color(Some(EggColor::Green), "Examine", "Green egg"), None);
        assert_eq!(highlight_color(None, "Walk here", "Yellow egg"), None);
    }

    #[test]
    fn no_call_means_no_colored_highlight() {
        assert_eq!(highlight_color(None, "Take", "Red egg"), None);
    }
}
