//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub thread_id: String,
    pub sender_username: String,
    pub body: String,
    pub created_on: DateTime<Utc>,
}
