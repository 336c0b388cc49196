//! Activity records - append-only audit rows behind the user feed

use chrono::{DateTime, Utc};

/// Which per-feature audit table a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityFeature {
    Game,
    Comment,
    Follow,
    Invite,
}

impl ActivityFeature {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Comment => "comment",
            Self::Follow => "follow",
            Self::Invite => "invite",
        }
    }
}

/// A single feed event. Written as a side effect of mutations elsewhere
/// (game creation, join/leave, comment, follow, invite); the aggregator
/// only ever reads these rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: i64,
    pub feature: ActivityFeature,
    /// The acting user
    pub username: String,
    /// Counterparty, when the operation has one (followed user, invitee, ...)
    pub target_username: Option<String>,
    pub game_id: Option<i64>,
    pub data: Option<serde_json::Value>,
    pub operation: String,
    pub created_on: DateTime<Utc>,
}
