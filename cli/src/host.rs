//! Simulated game client driven by replay commands

use bassault_core::game_data::{Varbit, WidgetInfo};
use bassault_core::{Client, MenuEntry, WorldPoint};
use hashbrown::HashMap;

/// Host state that replay commands write and the plugin reads.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    widgets: HashMap<WidgetInfo, String>,
    vars: HashMap<Varbit, i32>,
    in_instance: bool,
    menu: Vec<MenuEntry>,
    player: Option<WorldPoint>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_widget_text(&mut self, widget: WidgetInfo, text: String) {
        self.widgets.insert(widget, text);
    }

    pub fn clear_widget(&mut self, widget: WidgetInfo) {
        self.widgets.remove(&widget);
    }

    pub fn set_var(&mut self, varbit: Varbit, value: i32) {
        self.vars.insert(varbit, value);
    }

    pub fn set_in_instance(&mut self, in_instance: bool) {
        self.in_instance = in_instance;
    }

    pub fn push_menu_entry(&mut self, entry: MenuEntry) {
        self.menu.push(entry);
    }

    pub fn clear_menu(&mut self) {
        self.menu.clear();
    }

    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }

    pub fn set_player_location(&mut self, location: Option<WorldPoint>) {
        self.player = location;
    }
}

impl Client for ScriptedClient {
    fn widget_text(&self, widget: WidgetInfo) -> Option<String> {
        self.widgets.get(&widget).cloned()
    }

    fn var(&self, varbit: Varbit) -> i32 {
        self.vars.get(&varbit).copied().unwrap_or_default()
    }

    fn is_in_instanced_region(&self) -> bool {
        self.in_instance
    }

    fn menu_entries(&self) -> Vec<MenuEntry> {
        self.menu.clone()
    }

    fn set_menu_entries(&mut self, entries: Vec<MenuEntry>) {
        self.menu = entries;
    }

    fn local_player_location(&self) -> Option<WorldPoint> {
        self.player
    }
}
