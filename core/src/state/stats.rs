/// Collection and healing counters shown by the overlay.
/// Accumulation is driven by the overlay side; the plugin only stores and
/// resets them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionStats {
    pub collected_egg_count: u32,
    pub positive_egg_count: u32,
    pub wrong_eggs: u32,
    pub hp_healed: u32,
    // Lifetime totals, kept across shutdowns
    pub total_collected_egg_count: u32,
    pub total_hp_healed: u32,
}

impl CollectionStats {
    /// Count a deposited egg toward the round and lifetime totals
    pub fn record_collected(&mut self, correct: bool) {
        self.collected_egg_count = self.collected_egg_count.saturating_add(1);
        self.total_collected_egg_count = self.total_collected_egg_count.saturating_add(1);
        if correct {
            self.positive_egg_count = self.positive_egg_count.saturating_add(1);
        } else {
            self.wrong_eggs = self.wrong_eggs.saturating_add(1);
        }
    }

    pub fn record_healed(&mut self, hp: u32) {
        self.hp_healed = self.hp_healed.saturating_add(hp);
        self.total_hp_healed = self.total_hp_healed.saturating_add(hp);
    }

    pub fn reset_round(&mut self) {
        self.collected_egg_count = 0;
        self.positive_egg_count = 0;
        self.wrong_eggs = 0;
        self.hp_healed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_totals() {
        let mut stats = CollectionStats::default();
        stats.record_collected(true);
        stats.record_collected(false);
        stats.record_healed(27);

        stats.reset_round();

        assert_eq!(stats.collected_egg_count, 0);
        assert_eq!(stats.wrong_eggs, 0);
        assert_eq!(stats.hp_healed, 0);
        assert_eq!(stats.total_collected_egg_count, 2);
        assert_eq!(stats.total_hp_healed, 27);
    }

    #[test]
    fn totals_saturate() {
        let mut stats = CollectionStats {
            total_collected_egg_count: u32::MAX,
            total_hp_healed: u32::MAX - 1,
            ..CollectionStats::default()
        };
        stats.record_collected(true);
        stats.record_healed(10);

        assert_eq!(stats.total_collected_egg_count, u32::MAX);
        assert_eq!(stats.total_hp_healed, u32::MAX);
        assert_eq!(stats.collected_egg_count, 1);
        assert_eq!(stats.hp_healed, 10);
    }
}
