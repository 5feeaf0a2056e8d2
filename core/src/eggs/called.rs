use crate::game_data::WidgetInfo;
use crate::host::Client;

use super::{EggColor, EggLocationCount, EggTracker};

/// Raw text of the collector's listen widget
pub fn collector_heard_call(client: &dyn Client) -> Option<String> {
    client.widget_text(WidgetInfo::CollectorListenText)
}

/// Egg color the collector was last told to pick up
pub fn called_color(client: &dyn Client) -> Option<EggColor> {
    collector_heard_call(client).and_then(|call| EggColor::from_call(&call))
}

/// Location map for the called color
pub fn called_egg_map<'a>(client: &dyn Client, eggs: &'a EggTracker) -> Option<&'a EggLocationCount> {
    called_color(client).map(|color| eggs.map(color))
}
