use bassault_types::{Color, egg_colors};
use hashbrown::HashMap;

use crate::game_data::{ItemId, item_id};
use crate::host::WorldPoint;

/// Pending eggs per tile. Counts are always at least 1.
pub type EggLocationCount = HashMap<WorldPoint, u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EggColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl EggColor {
    pub const ALL: [EggColor; 4] = [
        EggColor::Red,
        EggColor::Green,
        EggColor::Blue,
        EggColor::Yellow,
    ];

    pub fn from_item_id(item: ItemId) -> Option<Self> {
        match item {
            item_id::RED_EGG => Some(EggColor::Red),
            item_id::GREEN_EGG => Some(EggColor::Green),
            item_id::BLUE_EGG => Some(EggColor::Blue),
            item_id::YELLOW_EGG => Some(EggColor::Yellow),
            _ => None,
        }
    }

    /// Color announced by the collector's listen widget.
    ///
    /// Yellow is never called; yellow eggs are always worth picking up.
    pub fn from_call(call: &str) -> Option<Self> {
        match call {
            "Red eggs" => Some(EggColor::Red),
            "Green eggs" => Some(EggColor::Green),
            "Blue eggs" => Some(EggColor::Blue),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EggColor::Red => "Red",
            EggColor::Green => "Green",
            EggColor::Blue => "Blue",
            EggColor::Yellow => "Yellow",
        }
    }

    /// Ground item name, as shown in menu targets
    pub fn item_name(self) -> &'static str {
        match self {
            EggColor::Red => "Red egg",
            EggColor::Green => "Green egg",
            EggColor::Blue => "Blue egg",
            EggColor::Yellow => "Yellow egg",
        }
    }

    pub fn display_color(self) -> Color {
        match self {
            EggColor::Red => egg_colors::RED,
            EggColor::Green => egg_colors::GREEN,
            EggColor::Blue => egg_colors::CYAN,
            EggColor::Yellow => egg_colors::YELLOW,
        }
    }
}

/// One location map per egg color
#[derive(Debug, Default, Clone)]
pub struct EggTracker {
    red: EggLocationCount,
    green: EggLocationCount,
    blue: EggLocationCount,
    yellow: EggLocationCount,
}

impl EggTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more egg of `color` at `position`. Returns the new count.
    pub fn record_spawn(&mut self, color: EggColor, position: WorldPoint) -> u32 {
        let count = self.map_mut(color).entry(position).or_insert(0);
        *count += 1;
        *count
    }

    /// Record a ground-item spawn; items that are not eggs are ignored
    pub fn record_item(&mut self, item: ItemId, position: WorldPoint) -> Option<(EggColor, u32)> {
        let color = EggColor::from_item_id(item)?;
        Some((color, self.record_spawn(color, position)))
    }

    pub fn count_at(&self, color: EggColor, position: WorldPoint) -> u32 {
        self.map(color).get(&position).copied().unwrap_or(0)
    }

    pub fn map(&self, color: EggColor) -> &EggLocationCount {
        match color {
            EggColor::Red => &self.red,
            EggColor::Green => &self.green,
            EggColor::Blue => &self.blue,
            EggColor::Yellow => &self.yellow,
        }
    }

    fn map_mut(&mut self, color: EggColor) -> &mut EggLocationCount {
        match color {
            EggColor::Red => &mut self.red,
            EggColor::Green => &mut self.green,
            EggColor::Blue => &mut self.blue,
            EggColor::Yellow => &mut self.yellow,
        }
    }

    pub fn red_eggs(&self) -> &EggLocationCount {
        &self.red
    }

    pub fn green_eggs(&self) -> &EggLocationCount {
        &self.green
    }

    pub fn blue_eggs(&self) -> &EggLocationCount {
        &self.blue
    }

    pub fn yellow_eggs(&self) -> &EggLocationCount {
        &self.yellow
    }

    /// Total eggs recorded across all colors and tiles
    pub fn total(&self) -> u32 {
        EggColor::ALL
            .iter()
            .flat_map(|&color| self.map(color).values())
            .sum()
    }

    pub fn clear(&mut self) {
        for color in EggColor::ALL {
            self.map_mut(color).clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_spawns_accumulate() {
        let mut eggs = EggTracker::new();
        let tile = WorldPoint::new(1890, 5460, 0);

        for expected in 1..=5 {
            assert_eq!(eggs.record_spawn(EggColor::Green, tile), expected);
        }
        assert_eq!(eggs.count_at(EggColor::Green, tile), 5);
        assert_eq!(eggs.green_eggs().len(), 1);
    }

    #[test]
    fn colors_and_tiles_are_independent() {
        let mut eggs = EggTracker::new();
        let a = WorldPoint::new(10, 10, 0);
        let b = WorldPoint::new(10, 10, 1);

        eggs.record_spawn(EggColor::Red, a);
        eggs.record_spawn(EggColor::Blue, a);
        eggs.record_spawn(EggColor::Red, b);

        assert_eq!(eggs.count_at(EggColor::Red, a), 1);
        assert_eq!(eggs.count_at(EggColor::Red, b), 1);
        assert_eq!(eggs.count_at(EggColor::Blue, a), 1);
        assert_eq!(eggs.count_at(EggColor::Blue, b), 0);
        assert_eq!(eggs.count_at(EggColor::Yellow, a), 0);
        assert_eq!(eggs.total(), 3);
    }

    #[test]
    fn non_egg_items_are_ignored() {
        let mut eggs = EggTracker::new();
        let tile = WorldPoint::new(0, 0, 0);

        assert_eq!(eggs.record_item(item_id::TOFU, tile), None);
        assert_eq!(eggs.record_item(item_id::YELLOW_EGG, tile), Some((EggColor::Yellow, 1)));
        assert_eq!(eggs.total(), 1);
    }

    #[test]
    fn clear_empties_every_color() {
        let mut eggs = EggTracker::new();
        for color in EggColor::ALL {
            eggs.record_spawn(color, WorldPoint::new(1, 2, 0));
        }
        eggs.clear();
        assert_eq!(eggs.total(), 0);
    }

    #[test]
    fn yellow_is_never_called() {
        assert_eq!(EggColor::from_call("Blue eggs"), Some(EggColor::Blue));
        assert_eq!(EggColor::from_call("Yellow eggs"), None);
        assert_eq!(EggColor::from_call("red eggs"), None);
    }
}
