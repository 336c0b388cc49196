//! Game comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for game_comments table
#[derive(Debug, Clone, FromRow)]
pub struct GameCommentModel {
    pub id: i64,
    pub game_id: i64,
    pub author_username: String,
    pub body: String,
    pub is_active: bool,
    pub created_on: DateTime<Utc>,
}
