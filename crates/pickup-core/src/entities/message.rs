//! Message entity - a single message within a thread

use chrono::{DateTime, Utc};

use crate::value_objects::ThreadId;

/// Message entity. Visibility is overlaid per viewer: a member can
/// tombstone a message for themselves without affecting anyone else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub thread_id: ThreadId,
    pub sender_username: String,
    pub body: String,
    pub created_on: DateTime<Utc>,
}
