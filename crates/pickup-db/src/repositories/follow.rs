//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pickup_core::entities::User;
use pickup_core::traits::{FollowRepository, RepoResult};

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn toggle(&self, followed: &str, follower: &str) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let deleted = sqlx::query(
            "DELETE FROM follows WHERE followed_username = $1 AND follower_username = $2",
        )
        .bind(followed)
        .bind(follower)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let now_following = if deleted.rows_affected() == 0 {
            sqlx::query(
                "INSERT INTO follows (followed_username, follower_username) VALUES ($1, $2)",
            )
            .bind(followed)
            .bind(follower)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
            true
        } else {
            false
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(now_following)
    }

    #[instrument(skip(self))]
    async fn followers(&self, username: &str) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.username, u.first_name, u.last_name, u.birth_date, u.city, u.state,
                   u.image, u.phone, u.email, u.is_active, u.is_private, u.is_admin, u.created_on
            FROM users u
            JOIN follows f ON f.follower_username = u.username
            WHERE f.followed_username = $1 AND u.is_active
            ORDER BY u.username
            ",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn following(&self, username: &str) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.username, u.first_name, u.last_name, u.birth_date, u.city, u.state,
                   u.image, u.phone, u.email, u.is_active, u.is_private, u.is_admin, u.created_on
            FROM users u
            JOIN follows f ON f.followed_username = u.username
            WHERE f.follower_username = $1 AND u.is_active
            ORDER BY u.username
            ",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgFollowRepository>();
    }
}
