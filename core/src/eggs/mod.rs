//! Collector egg tracking
//!
//! - **tracker**: where eggs of each color have landed
//! - **called**: which color the collector was last told to pick up
//! - **highlight**: recolors "Take" menu entries for the called egg

mod called;
mod highlight;
mod tracker;

pub use called::{called_color, called_egg_map, collector_heard_call};
pub use highlight::{MenuHighlight, highlight_color, highlight_menu_entry};
pub use tracker::{EggColor, EggLocationCount, EggTracker};
