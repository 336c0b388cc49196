//! Game comment entity

use chrono::{DateTime, Utc};

/// A comment on a game. Soft-deletable per comment (not per viewer):
/// deactivating hides it from everyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameComment {
    pub id: i64,
    pub game_id: i64,
    pub author_username: String,
    pub body: String,
    pub is_active: bool,
    pub created_on: DateTime<Utc>,
}
