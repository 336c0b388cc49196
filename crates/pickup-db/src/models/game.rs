//! Game database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for games table
#[derive(Debug, Clone, FromRow)]
pub struct GameModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub game_time: DateTime<Utc>,
    pub creator_username: String,
    pub is_active: bool,
    pub created_on: DateTime<Utc>,
}
