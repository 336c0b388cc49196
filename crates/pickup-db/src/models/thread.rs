//! Thread listing row model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row shape for the thread-listing query: a thread joined with the most
/// recent message still visible to the querying user.
#[derive(Debug, Clone, FromRow)]
pub struct ThreadSummaryModel {
    pub thread_id: String,
    pub message_id: i64,
    pub sender_username: String,
    pub body: String,
    pub created_on: DateTime<Utc>,
}
