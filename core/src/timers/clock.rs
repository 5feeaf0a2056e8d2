use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a caller can keep a handle while the
/// plugin owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, time: NaiveDateTime) {
        self.now.set(time);
    }

    /// Move the clock forward and return the new time. Returns `None` and
    /// leaves the clock unchanged if the result is not representable.
    pub fn advance(&self, by: Duration) -> Option<NaiveDateTime> {
        let delta = chrono::Duration::from_std(by).ok()?;
        let next = self.now.get().checked_add_signed(delta)?;
        self.now.set(next);
        Some(next)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_time(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    #[test]
    fn clones_share_time() {
        let clock = ManualClock::new(make_time(12, 0, 0));
        let handle = clock.clone();

        assert_eq!(handle.advance(Duration::from_secs(90)), Some(make_time(12, 1, 30)));
        assert_eq!(clock.now(), make_time(12, 1, 30));

        clock.set(make_time(13, 0, 0));
        assert_eq!(handle.now(), make_time(13, 0, 0));
    }

    #[test]
    fn advance_out_of_range_keeps_time() {
        let clock = ManualClock::new(make_time(12, 0, 0));

        // Too large for a signed millisecond delta
        assert_eq!(clock.advance(Duration::from_secs(u64::MAX / 1000)), None);
        // Fits the delta but runs past the last representable date
        assert_eq!(clock.advance(Duration::from_secs(9_000_000_000_000)), None);

        assert_eq!(clock.now(), make_time(12, 0, 0));
    }
}
