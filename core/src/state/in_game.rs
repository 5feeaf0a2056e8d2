/// Edge between "in a minigame instance" and not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InGameTransition {
    Entered,
    Left,
}

/// Remembers the previous in-game value so changes can be classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InGameFlag {
    previous: i32,
}

impl InGameFlag {
    /// Record the current value and report the edge, if it changed.
    /// Moving away from 1 is leaving; any other change is entering.
    pub fn update(&mut self, current: i32) -> Option<InGameTransition> {
        let previous = std::mem::replace(&mut self.previous, current);
        if previous == current {
            return None;
        }
        if previous == 1 {
            Some(InGameTransition::Left)
        } else {
            Some(InGameTransition::Entered)
        }
    }

    pub fn value(&self) -> i32 {
        self.previous
    }

    pub fn is_in_game(&self) -> bool {
        self.previous != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let mut flag = InGameFlag::default();
        assert_eq!(flag.update(0), None);
        assert_eq!(flag.update(1), Some(InGameTransition::Entered));
        assert_eq!(flag.update(1), None);
        assert!(flag.is_in_game());
        assert_eq!(flag.update(0), Some(InGameTransition::Left));
        assert!(!flag.is_in_game());
    }

    #[test]
    fn unusual_values_count_as_entering() {
        let mut flag = InGameFlag::default();
        assert_eq!(flag.update(2), Some(InGameTransition::Entered));
        assert_eq!(flag.update(0), Some(InGameTransition::Entered));
        assert_eq!(flag.value(), 0);
    }
}
