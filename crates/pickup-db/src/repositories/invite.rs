//! PostgreSQL implementation of InviteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pickup_core::entities::{Invite, InviteStatus};
use pickup_core::traits::{InviteRepository, NewInvite, RepoResult};

use crate::mappers::invite_status_to_str;
use crate::models::InviteModel;

use super::error::{invite_not_found, map_db_error};

const INVITE_COLUMNS: &str =
    "id, game_id, from_username, to_username, status::TEXT AS status, created_on";

/// PostgreSQL implementation of InviteRepository
#[derive(Clone)]
pub struct PgInviteRepository {
    pool: PgPool,
}

impl PgInviteRepository {
    /// Create a new PgInviteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InviteRepository for PgInviteRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Invite>> {
        let result = sqlx::query_as::<_, InviteModel>(&format!(
            "SELECT {INVITE_COLUMNS} FROM invites WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Invite::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, invite: &NewInvite) -> RepoResult<Invite> {
        let result = sqlx::query_as::<_, InviteModel>(&format!(
            r"
            INSERT INTO invites (game_id, from_username, to_username)
            VALUES ($1, $2, $3)
            RETURNING {INVITE_COLUMNS}
            "
        ))
        .bind(invite.game_id)
        .bind(&invite.from_username)
        .bind(&invite.to_username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Invite::from(result))
    }

    #[instrument(skip(self, invites))]
    async fn create_many(&self, invites: &[NewInvite]) -> RepoResult<Vec<Invite>> {
        // All-or-nothing: any failure rolls the whole batch back
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let mut created = Vec::with_capacity(invites.len());
        for invite in invites {
            let result = sqlx::query_as::<_, InviteModel>(&format!(
                r"
                INSERT INTO invites (game_id, from_username, to_username)
                VALUES ($1, $2, $3)
                RETURNING {INVITE_COLUMNS}
                "
            ))
            .bind(invite.game_id)
            .bind(&invite.from_username)
            .bind(&invite.to_username)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            created.push(Invite::from(result));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(created)
    }

    #[instrument(skip(self))]
    async fn has_pending_from_active_sender(
        &self,
        game_id: i64,
        to_username: &str,
    ) -> RepoResult<bool> {
        // A pending invite from a deactivated sender does not block
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1
                FROM invites i
                JOIN users u ON u.username = i.from_username
                WHERE i.game_id = $1
                  AND i.to_username = $2
                  AND i.status = 'pending'
                  AND u.is_active
            )
            ",
        )
        .bind(game_id)
        .bind(to_username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: i64, status: InviteStatus) -> RepoResult<Invite> {
        let result = sqlx::query_as::<_, InviteModel>(&format!(
            r"
            UPDATE invites
            SET status = $2::invite_status
            WHERE id = $1
            RETURNING {INVITE_COLUMNS}
            "
        ))
        .bind(id)
        .bind(invite_status_to_str(status))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| invite_not_found(id))?;

        Ok(Invite::from(result))
    }

    #[instrument(skip(self))]
    async fn find_by_game(&self, game_id: i64, include_inactive: bool) -> RepoResult<Vec<Invite>> {
        let results = if include_inactive {
            sqlx::query_as::<_, InviteModel>(&format!(
                r"
                SELECT {INVITE_COLUMNS}
                FROM invites
                WHERE game_id = $1
                ORDER BY created_on DESC, id DESC
                "
            ))
            .bind(game_id)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, InviteModel>(
                r"
                SELECT i.id, i.game_id, i.from_username, i.to_username,
                       i.status::TEXT AS status, i.created_on
                FROM invites i
                JOIN users uf ON uf.username = i.from_username AND uf.is_active
                JOIN users ut ON ut.username = i.to_username AND ut.is_active
                JOIN games g ON g.id = i.game_id AND g.is_active
                WHERE i.game_id = $1
                ORDER BY i.created_on DESC, i.id DESC
                ",
            )
            .bind(game_id)
            .fetch_all(&self.pool)
            .await
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Invite::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_sent(&self, username: &str, include_inactive: bool) -> RepoResult<Vec<Invite>> {
        let results = if include_inactive {
            sqlx::query_as::<_, InviteModel>(&format!(
                r"
                SELECT {INVITE_COLUMNS}
                FROM invites
                WHERE from_username = $1
                ORDER BY created_on DESC, id DESC
                "
            ))
            .bind(username)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, InviteModel>(
                r"
                SELECT i.id, i.game_id, i.from_username, i.to_username,
                       i.status::TEXT AS status, i.created_on
                FROM invites i
                JOIN users uf ON uf.username = i.from_username AND uf.is_active
                JOIN users ut ON ut.username = i.to_username AND ut.is_active
                JOIN games g ON g.id = i.game_id AND g.is_active
                WHERE i.from_username = $1
                ORDER BY i.created_on DESC, i.id DESC
                ",
            )
            .bind(username)
            .fetch_all(&self.pool)
            .await
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Invite::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_received(
        &self,
        username: &str,
        include_inactive: bool,
    ) -> RepoResult<Vec<Invite>> {
        let results = if include_inactive {
            sqlx::query_as::<_, InviteModel>(&format!(
                r"
                SELECT {INVITE_COLUMNS}
                FROM invites
                WHERE to_username = $1
                ORDER BY created_on DESC, id DESC
                "
            ))
            .bind(username)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, InviteModel>(
                r"
                SELECT i.id, i.game_id, i.from_username, i.to_username,
                       i.status::TEXT AS status, i.created_on
                FROM invites i
                JOIN users uf ON uf.username = i.from_username AND uf.is_active
                JOIN users ut ON ut.username = i.to_username AND ut.is_active
                JOIN games g ON g.id = i.game_id AND g.is_active
                WHERE i.to_username = $1
                ORDER BY i.created_on DESC, i.id DESC
                ",
            )
            .bind(username)
            .fetch_all(&self.pool)
            .await
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Invite::from).collect())
    }
}
