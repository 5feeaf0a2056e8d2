//! In-memory host used by unit tests

use hashbrown::HashMap;

use crate::game_data::{Varbit, WidgetInfo};
use crate::host::{Client, MenuEntry, WorldPoint};

#[derive(Debug, Default)]
pub struct FakeClient {
    pub widgets: HashMap<WidgetInfo, String>,
    pub vars: HashMap<Varbit, i32>,
    pub in_instance: bool,
    pub menu: Vec<MenuEntry>,
    pub player: Option<WorldPoint>,
    /// Number of times the menu was written back
    pub menu_writes: usize,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_widget(&mut self, widget: WidgetInfo, text: &str) {
        self.widgets.insert(widget, text.to_string());
    }

    pub fn set_var(&mut self, varbit: Varbit, value: i32) {
        self.vars.insert(varbit, value);
    }
}

impl Client for FakeClient {
    fn widget_text(&self, widget: WidgetInfo) -> Option<String> {
        self.widgets.get(&widget).cloned()
    }

    fn var(&self, varbit: Varbit) -> i32 {
        self.vars.get(&varbit).copied().unwrap_or(0)
    }

    fn is_in_instanced_region(&self) -> bool {
        self.in_instance
    }

    fn menu_entries(&self) -> Vec<MenuEntry> {
        self.menu.clone()
    }

    fn set_menu_entries(&mut self, entries: Vec<MenuEntry>) {
        self.menu = entries;
        self.menu_writes += 1;
    }

    fn local_player_location(&self) -> Option<WorldPoint> {
        self.player
    }
}
