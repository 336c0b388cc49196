//! Invite entity - an invitation to join a game

use chrono::{DateTime, Utc};

/// Invite status state machine: `pending -> {accepted, denied, cancelled}`.
/// Terminal states never transition further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteStatus {
    Pending,
    Accepted,
    Denied,
    Cancelled,
}

impl InviteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Denied => "denied",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a status from its wire representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "denied" => Some(Self::Denied),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Whether the state machine permits moving from `self` to `next`
    pub fn can_transition_to(self, next: Self) -> bool {
        self == Self::Pending && next != Self::Pending
    }
}

impl std::fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invite entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    pub id: i64,
    pub game_id: i64,
    pub from_username: String,
    pub to_username: String,
    pub status: InviteStatus,
    pub created_on: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            InviteStatus::Pending,
            InviteStatus::Accepted,
            InviteStatus::Denied,
            InviteStatus::Cancelled,
        ] {
            assert_eq!(InviteStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(InviteStatus::parse("approved"), None);
    }

    #[test]
    fn test_pending_transitions_anywhere_but_pending() {
        let pending = InviteStatus::Pending;
        assert!(pending.can_transition_to(InviteStatus::Accepted));
        assert!(pending.can_transition_to(InviteStatus::Denied));
        assert!(pending.can_transition_to(InviteStatus::Cancelled));
        assert!(!pending.can_transition_to(InviteStatus::Pending));
    }

    #[test]
    fn test_terminal_states_are_frozen() {
        for terminal in [
            InviteStatus::Accepted,
            InviteStatus::Denied,
            InviteStatus::Cancelled,
        ] {
            assert!(terminal.is_terminal());
            for next in [
                InviteStatus::Pending,
                InviteStatus::Accepted,
                InviteStatus::Denied,
                InviteStatus::Cancelled,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }
}
