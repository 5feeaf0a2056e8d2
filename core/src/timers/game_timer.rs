//! Elapsed-time tracking for a single minigame run.
//!
//! A `GameTimer` exists only while a game is being timed. The owner creates
//! it when wave 1 begins and drops it when the game ends, so "no timer" is
//! represented by `Option<GameTimer>` on the owning side.

use std::time::Duration;

use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTimer {
    game_start: NaiveDateTime,
    wave_start: NaiveDateTime,
}

impl GameTimer {
    /// Start timing a game. The first wave starts at the same instant.
    pub fn start(now: NaiveDateTime) -> Self {
        Self {
            game_start: now,
            wave_start: now,
        }
    }

    /// Move the wave checkpoint; the game checkpoint is untouched
    pub fn mark_wave_start(&mut self, now: NaiveDateTime) {
        self.wave_start = now;
    }

    pub fn game_start(&self) -> NaiveDateTime {
        self.game_start
    }

    pub fn wave_start(&self) -> NaiveDateTime {
        self.wave_start
    }

    /// Time since the game (`true`) or the current wave (`false`) started.
    /// Clamped to zero if `now` is before the checkpoint.
    pub fn elapsed(&self, now: NaiveDateTime, since_game_start: bool) -> Duration {
        let from = if since_game_start {
            self.game_start
        } else {
            self.wave_start
        };
        now.signed_duration_since(from).to_std().unwrap_or_default()
    }

    /// [`elapsed`](Self::elapsed) as `mm:ss`
    pub fn format_elapsed(&self, now: NaiveDateTime, since_game_start: bool) -> String {
        format_duration(self.elapsed(now, since_game_start))
    }
}

/// Format whole seconds as `mm:ss`. Minutes keep counting past 59.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_time(hour: u32, min: u32, sec: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_milli_opt(hour, min, sec, ms)
            .unwrap()
    }

    #[test]
    fn fresh_timer_reads_zero() {
        let start = make_time(12, 0, 0, 0);
        let timer = GameTimer::start(start);

        assert_eq!(timer.format_elapsed(start, true), "00:00");
        assert_eq!(timer.format_elapsed(start, false), "00:00");
    }

    #[test]
    fn checkpoints_coincide_at_start() {
        let timer = GameTimer::start(make_time(12, 0, 0, 0));
        let later = make_time(12, 0, 42, 0);

        assert_eq!(timer.elapsed(later, true), Duration::from_secs(42));
        assert_eq!(timer.elapsed(later, false), Duration::from_secs(42));
    }

    #[test]
    fn wave_mark_only_moves_wave_checkpoint() {
        let mut timer = GameTimer::start(make_time(12, 0, 0, 0));
        timer.mark_wave_start(make_time(12, 1, 10, 0));

        let now = make_time(12, 1, 35, 0);
        assert_eq!(timer.elapsed(now, true), Duration::from_secs(95));
        assert_eq!(timer.elapsed(now, false), Duration::from_secs(25));
        assert_eq!(timer.game_start(), make_time(12, 0, 0, 0));
    }

    #[test]
    fn time_before_checkpoint_clamps_to_zero() {
        let timer = GameTimer::start(make_time(12, 0, 10, 0));
        assert_eq!(timer.elapsed(make_time(12, 0, 0, 0), true), Duration::ZERO);
    }

    #[test]
    fn format_truncates_millis_and_keeps_long_minutes() {
        assert_eq!(format_duration(Duration::from_millis(65_999)), "01:05");
        assert_eq!(format_duration(Duration::from_secs(75 * 60 + 3)), "75:03");
    }
}
