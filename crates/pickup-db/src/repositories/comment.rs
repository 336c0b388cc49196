//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pickup_core::entities::GameComment;
use pickup_core::traits::{CommentRepository, RepoResult};

use crate::models::GameCommentModel;

use super::error::{comment_not_found, map_db_error};

const COMMENT_COLUMNS: &str = "id, game_id, author_username, body, is_active, created_on";

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<GameComment>> {
        let result = sqlx::query_as::<_, GameCommentModel>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM game_comments WHERE id = $1 AND is_active"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GameComment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_game(&self, game_id: i64) -> RepoResult<Vec<GameComment>> {
        let results = sqlx::query_as::<_, GameCommentModel>(&format!(
            r"
            SELECT {COMMENT_COLUMNS}
            FROM game_comments
            WHERE game_id = $1 AND is_active
            ORDER BY created_on, id
            "
        ))
        .bind(game_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GameComment::from).collect())
    }

    #[instrument(skip(self, body))]
    async fn create(&self, game_id: i64, author: &str, body: &str) -> RepoResult<GameComment> {
        let result = sqlx::query_as::<_, GameCommentModel>(&format!(
            r"
            INSERT INTO game_comments (game_id, author_username, body)
            VALUES ($1, $2, $3)
            RETURNING {COMMENT_COLUMNS}
            "
        ))
        .bind(game_id)
        .bind(author)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(GameComment::from(result))
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> RepoResult<()> {
        let result =
            sqlx::query("UPDATE game_comments SET is_active = FALSE WHERE id = $1 AND is_active")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }

        Ok(())
    }
}
