//! PostgreSQL implementation of GameRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pickup_core::entities::{Game, User};
use pickup_core::traits::{GameRepository, NewGame, RepoResult};

use crate::models::{GameModel, UserModel};

use super::error::{game_not_found, map_db_error};

const GAME_COLUMNS: &str =
    "id, title, description, location, game_time, creator_username, is_active, created_on";

/// PostgreSQL implementation of GameRepository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    /// Create a new PgGameRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Game>> {
        let result = sqlx::query_as::<_, GameModel>(&format!(
            "SELECT {GAME_COLUMNS} FROM games WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Game::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, include_inactive: bool) -> RepoResult<Vec<Game>> {
        let results = sqlx::query_as::<_, GameModel>(&format!(
            r"
            SELECT {GAME_COLUMNS}
            FROM games
            WHERE is_active OR $1
            ORDER BY created_on DESC, id DESC
            "
        ))
        .bind(include_inactive)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Game::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_player(&self, username: &str) -> RepoResult<Vec<Game>> {
        let results = sqlx::query_as::<_, GameModel>(
            r"
            SELECT g.id, g.title, g.description, g.location, g.game_time,
                   g.creator_username, g.is_active, g.created_on
            FROM games g
            JOIN game_players gp ON gp.game_id = g.id
            WHERE gp.username = $1 AND g.is_active
            ORDER BY g.created_on DESC, g.id DESC
            ",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Game::from).collect())
    }

    #[instrument(skip(self, game))]
    async fn create(&self, game: &NewGame) -> RepoResult<Game> {
        let result = sqlx::query_as::<_, GameModel>(&format!(
            r"
            INSERT INTO games (title, description, location, game_time, creator_username)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {GAME_COLUMNS}
            "
        ))
        .bind(&game.title)
        .bind(&game.description)
        .bind(&game.location)
        .bind(game.game_time)
        .bind(&game.creator_username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Game::from(result))
    }

    #[instrument(skip(self))]
    async fn set_active(&self, id: i64, active: bool) -> RepoResult<()> {
        let result = sqlx::query("UPDATE games SET is_active = $2 WHERE id = $1")
            .bind(id)
            .bind(active)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(game_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_player(&self, game_id: i64, username: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO game_players (game_id, username)
            VALUES ($1, $2)
            ON CONFLICT (game_id, username) DO NOTHING
            ",
        )
        .bind(game_id)
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_player(&self, game_id: i64, username: &str) -> RepoResult<()> {
        sqlx::query("DELETE FROM game_players WHERE game_id = $1 AND username = $2")
            .bind(game_id)
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn players(&self, game_id: i64) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.username, u.first_name, u.last_name, u.birth_date, u.city, u.state,
                   u.image, u.phone, u.email, u.is_active, u.is_private, u.is_admin, u.created_on
            FROM users u
            JOIN game_players gp ON gp.username = u.username
            WHERE gp.game_id = $1 AND u.is_active
            ORDER BY u.username
            ",
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn is_player(&self, game_id: i64, username: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM game_players WHERE game_id = $1 AND username = $2)",
        )
        .bind(game_id)
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgGameRepository>();
    }
}
