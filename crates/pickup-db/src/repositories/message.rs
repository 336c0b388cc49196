//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pickup_core::entities::Message;
use pickup_core::traits::{MessageRepository, RepoResult};
use pickup_core::value_objects::ThreadId;

use crate::models::MessageModel;

use super::error::map_db_error;

const MESSAGE_COLUMNS: &str = "id, thread_id, sender_username, body, created_on";

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Message::from))
    }

    #[instrument(skip(self, body))]
    async fn create(&self, thread_id: &ThreadId, sender: &str, body: &str) -> RepoResult<Message> {
        let result = sqlx::query_as::<_, MessageModel>(&format!(
            r"
            INSERT INTO messages (thread_id, sender_username, body)
            VALUES ($1, $2, $3)
            RETURNING {MESSAGE_COLUMNS}
            "
        ))
        .bind(thread_id.as_str())
        .bind(sender)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Message::from(result))
    }

    #[instrument(skip(self))]
    async fn find_visible(&self, thread_id: &ThreadId, viewer: &str) -> RepoResult<Vec<Message>> {
        // Per-viewer tombstones overlay the thread history; other members'
        // tombstones are irrelevant here
        let results = sqlx::query_as::<_, MessageModel>(&format!(
            r"
            SELECT {MESSAGE_COLUMNS}
            FROM messages
            WHERE thread_id = $1
              AND NOT EXISTS (
                  SELECT 1 FROM hidden_messages h
                  WHERE h.message_id = messages.id AND h.username = $2
              )
            ORDER BY id
            "
        ))
        .bind(thread_id.as_str())
        .bind(viewer)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self))]
    async fn hide(&self, message_id: i64, viewer: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO hidden_messages (message_id, username)
            VALUES ($1, $2)
            ON CONFLICT (message_id, username) DO NOTHING
            ",
        )
        .bind(message_id)
        .bind(viewer)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn hide_thread(&self, thread_id: &ThreadId, viewer: &str) -> RepoResult<Vec<i64>> {
        // One statement covers select-and-insert, so the fan-out is atomic;
        // already-hidden messages are skipped and not returned
        let hidden = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO hidden_messages (message_id, username)
            SELECT m.id, $2
            FROM messages m
            WHERE m.thread_id = $1
              AND NOT EXISTS (
                  SELECT 1 FROM hidden_messages h
                  WHERE h.message_id = m.id AND h.username = $2
              )
            RETURNING message_id
            ",
        )
        .bind(thread_id.as_str())
        .bind(viewer)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMessageRepository>();
    }
}
