//! Boundary to the host game client.
//!
//! The host owns the widget tree, game-state integers and the transient
//! right-click menu. The plugin only ever sees it through [`Client`], and
//! writes chat output through [`ChatSink`]. Every lookup returns an absent
//! value instead of failing.

use crate::chat::QueuedMessage;
use crate::game_data::{Varbit, WidgetInfo};

/// Tile coordinate in the game world. Only used as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl WorldPoint {
    pub fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }
}

/// One row of the right-click menu. Both strings may carry color tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuEntry {
    pub option: String,
    pub target: String,
}

impl MenuEntry {
    pub fn new(option: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            option: option.into(),
            target: target.into(),
        }
    }
}

/// Read/write view of the host client.
pub trait Client {
    /// Current text of a widget, `None` when it is not loaded
    fn widget_text(&self, widget: WidgetInfo) -> Option<String>;

    fn var(&self, varbit: Varbit) -> i32;

    fn is_in_instanced_region(&self) -> bool;

    /// Snapshot of the menu. Newly added entries are appended last.
    fn menu_entries(&self) -> Vec<MenuEntry>;

    /// Replace the whole menu
    fn set_menu_entries(&mut self, entries: Vec<MenuEntry>);

    fn local_player_location(&self) -> Option<WorldPoint>;
}

/// Output channel for chat messages.
pub trait ChatSink {
    fn queue(&mut self, message: QueuedMessage);
}

impl ChatSink for Vec<QueuedMessage> {
    fn queue(&mut self, message: QueuedMessage) {
        self.push(message);
    }
}
