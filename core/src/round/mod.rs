//! Role assignment for the current round.
//!
//! The role screens are sent as widget loads, and the host re-sends them
//! whenever the player reopens an in-game panel (e.g. the horn of glory).
//! Only the first load of a round counts.

use crate::game_data::widget_group;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Attacker,
    Defender,
    Healer,
    Collector,
}

impl Role {
    /// Role whose screen is the given widget group, if any
    pub fn from_group_id(group_id: i32) -> Option<Self> {
        match group_id {
            widget_group::ATTACKER => Some(Role::Attacker),
            widget_group::DEFENDER => Some(Role::Defender),
            widget_group::HEALER => Some(Role::Healer),
            widget_group::COLLECTOR => Some(Role::Collector),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Attacker => "Attacker",
            Role::Defender => "Defender",
            Role::Healer => "Healer",
            Role::Collector => "Collector",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    role: Role,
}

impl Round {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

/// Holds at most one active round
#[derive(Debug, Default)]
pub struct RoundTracker {
    current: Option<Round>,
}

impl RoundTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a round with `role` unless one is already active.
    /// Returns whether the round was started.
    pub fn assign(&mut self, role: Role) -> bool {
        if self.current.is_some() {
            return false;
        }
        self.current = Some(Round::new(role));
        true
    }

    /// Drop the active round. Returns the role it had, if any.
    pub fn clear(&mut self) -> Option<Role> {
        self.current.take().map(|round| round.role())
    }

    pub fn current(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.map(|round| round.role())
    }

    pub fn is_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_assignment_wins() {
        let mut rounds = RoundTracker::new();
        assert!(rounds.assign(Role::Healer));
        assert!(!rounds.assign(Role::Collector));
        assert_eq!(rounds.role(), Some(Role::Healer));
    }

    #[test]
    fn clear_allows_reassignment() {
        let mut rounds = RoundTracker::new();
        rounds.assign(Role::Attacker);

        assert_eq!(rounds.clear(), Some(Role::Attacker));
        assert!(rounds.current().is_none());
        assert_eq!(rounds.clear(), None);

        assert!(rounds.assign(Role::Defender));
        assert!(rounds.is_role(Role::Defender));
    }

    #[test]
    fn role_groups() {
        assert_eq!(Role::from_group_id(widget_group::COLLECTOR), Some(Role::Collector));
        assert_eq!(Role::from_group_id(widget_group::ATTACKER), Some(Role::Attacker));
        assert_eq!(Role::from_group_id(widget_group::REWARD), None);
        assert_eq!(Role::from_group_id(0), None);
    }
}
