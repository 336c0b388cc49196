//! Invite database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for invites table. The status enum is selected as TEXT
/// and parsed by the mapper.
#[derive(Debug, Clone, FromRow)]
pub struct InviteModel {
    pub id: i64,
    pub game_id: i64,
    pub from_username: String,
    pub to_username: String,
    pub status: String,
    pub created_on: DateTime<Utc>,
}
