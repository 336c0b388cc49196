//! PostgreSQL implementation of ThreadRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pickup_core::entities::User;
use pickup_core::traits::{RepoResult, ThreadRepository, ThreadSummary};
use pickup_core::value_objects::ThreadId;

use crate::models::{ThreadSummaryModel, UserModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ThreadRepository
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    #[instrument(skip(self))]
    async fn find_by_member_set(&self, usernames: &[String]) -> RepoResult<Option<ThreadId>> {
        // Set equality: every supplied username is a member AND the thread
        // has no members beyond the supplied set
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT t.id
            FROM threads t
            JOIN thread_members m ON m.thread_id = t.id
            WHERE m.username = ANY($1)
            GROUP BY t.id
            HAVING COUNT(*) = $2
               AND (SELECT COUNT(*) FROM thread_members WHERE thread_id = t.id) = $2
            ",
        )
        .bind(usernames)
        .bind(usernames.len() as i64)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ThreadId::new))
    }

    #[instrument(skip(self))]
    async fn create(&self, id: &ThreadId, usernames: &[String]) -> RepoResult<()> {
        // Thread row and full membership commit together or not at all
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("INSERT INTO threads (id) VALUES ($1)")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        for username in usernames {
            sqlx::query("INSERT INTO thread_members (thread_id, username) VALUES ($1, $2)")
                .bind(id.as_str())
                .bind(username)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: &ThreadId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn members(&self, id: &ThreadId) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.username, u.first_name, u.last_name, u.birth_date, u.city, u.state,
                   u.image, u.phone, u.email, u.is_active, u.is_private, u.is_admin, u.created_on
            FROM users u
            JOIN thread_members m ON m.username = u.username
            WHERE m.thread_id = $1
            ORDER BY u.username
            ",
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn is_member(&self, id: &ThreadId, username: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM thread_members WHERE thread_id = $1 AND username = $2)",
        )
        .bind(id.as_str())
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_for_user(&self, username: &str) -> RepoResult<Vec<ThreadSummary>> {
        // The inner join against the latest visible message drops threads
        // where the user has hidden everything
        let results = sqlx::query_as::<_, ThreadSummaryModel>(
            r"
            SELECT t.id AS thread_id, m.id AS message_id, m.sender_username, m.body, m.created_on
            FROM threads t
            JOIN thread_members tm ON tm.thread_id = t.id AND tm.username = $1
            JOIN LATERAL (
                SELECT id, sender_username, body, created_on
                FROM messages
                WHERE thread_id = t.id
                  AND NOT EXISTS (
                      SELECT 1 FROM hidden_messages h
                      WHERE h.message_id = messages.id AND h.username = $1
                  )
                ORDER BY id DESC
                LIMIT 1
            ) m ON TRUE
            ORDER BY m.id DESC
            ",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ThreadSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgThreadRepository>();
    }
}
