//! Wave and game duration tracking
//!
//! - **Clock**: source of "now", swappable for replays and tests
//! - **GameTimer**: two checkpoints (game start, current wave start)

mod clock;
mod game_timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use game_timer::{GameTimer, format_duration};
