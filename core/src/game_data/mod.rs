mod items;
mod widgets;

pub use items::{ItemId, is_egg, item_id, listen_item_id};
pub use widgets::{Varbit, WidgetInfo, widget_group};
