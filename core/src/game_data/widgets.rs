/// Interface group ids sent with widget-load events
pub mod widget_group {
    pub const ATTACKER: i32 = 485;
    pub const COLLECTOR: i32 = 486;
    pub const DEFENDER: i32 = 487;
    pub const HEALER: i32 = 488;
    pub const REWARD: i32 = 497;
}

/// Text widgets the plugin reads from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetInfo {
    AttackerListenText,
    DefenderListenText,
    HealerListenText,
    CollectorListenText,
    /// Body of the end-of-wave reward screen
    RewardText,
}

impl WidgetInfo {
    pub fn group_id(self) -> i32 {
        match self {
            WidgetInfo::AttackerListenText => widget_group::ATTACKER,
            WidgetInfo::DefenderListenText => widget_group::DEFENDER,
            WidgetInfo::HealerListenText => widget_group::HEALER,
            WidgetInfo::CollectorListenText => widget_group::COLLECTOR,
            WidgetInfo::RewardText => widget_group::REWARD,
        }
    }
}

/// Host game-state integers the plugin reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Varbit {
    /// Nonzero while inside a running minigame instance
    InGameBa,
}

impl Varbit {
    pub fn id(self) -> i32 {
        match self {
            Varbit::InGameBa => 3923,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_text_lives_in_role_groups() {
        assert_eq!(WidgetInfo::CollectorListenText.group_id(), widget_group::COLLECTOR);
        assert_eq!(WidgetInfo::HealerListenText.group_id(), widget_group::HEALER);
        assert_eq!(WidgetInfo::RewardText.group_id(), widget_group::REWARD);
        assert_eq!(Varbit::InGameBa.id(), 3923);
    }
}
