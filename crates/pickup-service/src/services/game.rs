//! Game service
//!
//! Game creation and listings, roster joins/leaves, and owner-or-admin
//! deactivation. Mutations record game activity.

use pickup_core::entities::{ActivityFeature, Game, User};
use pickup_core::error::DomainError;
use pickup_core::traits::{NewActivity, NewGame};
use tracing::{info, instrument};

use crate::dto::{CreateGameRequest, GameResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Game service
pub struct GameService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GameService<'a> {
    /// Create a new GameService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a game. The creator is enrolled as the first player.
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        creator_username: &str,
        request: CreateGameRequest,
    ) -> ServiceResult<GameResponse> {
        self.require_active_user(creator_username).await?;

        let game = self
            .ctx
            .game_repo()
            .create(&NewGame {
                title: request.title,
                description: request.description,
                location: request.location,
                game_time: request.game_time,
                creator_username: creator_username.to_string(),
            })
            .await?;

        self.ctx
            .game_repo()
            .add_player(game.id, creator_username)
            .await?;

        info!(game_id = game.id, creator = creator_username, "Game created");

        self.record_activity(creator_username, None, game.id, "create", Some(&game.title))
            .await?;

        Ok(GameResponse::from(game))
    }

    /// Fetch one game (active or not; the response carries both flags)
    #[instrument(skip(self))]
    pub async fn get(&self, game_id: i64) -> ServiceResult<GameResponse> {
        let game = self.require_game(game_id).await?;
        Ok(GameResponse::from(game))
    }

    /// List games, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, include_inactive: bool) -> ServiceResult<Vec<GameResponse>> {
        let games = self.ctx.game_repo().find_all(include_inactive).await?;
        Ok(games.into_iter().map(GameResponse::from).collect())
    }

    /// Active games a user plays in
    #[instrument(skip(self))]
    pub async fn games_for_user(&self, username: &str) -> ServiceResult<Vec<GameResponse>> {
        self.require_user(username).await?;

        let games = self.ctx.game_repo().find_by_player(username).await?;
        Ok(games.into_iter().map(GameResponse::from).collect())
    }

    /// Join a game's roster
    #[instrument(skip(self))]
    pub async fn join(&self, game_id: i64, username: &str) -> ServiceResult<()> {
        self.require_active_game(game_id).await?;
        self.require_active_user(username).await?;

        self.ctx.game_repo().add_player(game_id, username).await?;

        info!(game_id, username, "Player joined game");

        self.record_activity(username, None, game_id, "join", None)
            .await?;

        Ok(())
    }

    /// Leave a game's roster
    #[instrument(skip(self))]
    pub async fn leave(&self, game_id: i64, username: &str) -> ServiceResult<()> {
        self.require_game(game_id).await?;
        self.require_user(username).await?;

        self.ctx.game_repo().remove_player(game_id, username).await?;

        info!(game_id, username, "Player left game");

        self.record_activity(username, None, game_id, "leave", None)
            .await?;

        Ok(())
    }

    /// Roster of active players
    #[instrument(skip(self))]
    pub async fn players(&self, game_id: i64) -> ServiceResult<Vec<UserResponse>> {
        self.require_game(game_id).await?;

        let players = self.ctx.game_repo().players(game_id).await?;
        Ok(players.iter().map(UserResponse::from).collect())
    }

    /// Deactivate a game. Only the creator or an admin may do this.
    #[instrument(skip(self))]
    pub async fn deactivate(
        &self,
        game_id: i64,
        acting_username: &str,
        is_admin: bool,
    ) -> ServiceResult<()> {
        let game = self.require_game(game_id).await?;

        if game.creator_username != acting_username && !is_admin {
            return Err(ServiceError::forbidden(
                "Only the game creator may deactivate it",
            ));
        }

        self.ctx.game_repo().set_active(game_id, false).await?;

        info!(game_id, acting_username, "Game deactivated");

        self.record_activity(acting_username, None, game_id, "deactivate", None)
            .await?;

        Ok(())
    }

    async fn require_user(&self, username: &str) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()).into())
    }

    async fn require_active_user(&self, username: &str) -> ServiceResult<User> {
        let user = self.require_user(username).await?;
        if !user.is_active {
            return Err(DomainError::UserInactive(username.to_string()).into());
        }
        Ok(user)
    }

    async fn require_game(&self, game_id: i64) -> ServiceResult<Game> {
        self.ctx
            .game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| DomainError::GameNotFound(game_id).into())
    }

    async fn require_active_game(&self, game_id: i64) -> ServiceResult<Game> {
        let game = self.require_game(game_id).await?;
        if !game.is_active {
            return Err(DomainError::GameInactive(game_id).into());
        }
        Ok(game)
    }

    async fn record_activity(
        &self,
        username: &str,
        target: Option<&str>,
        game_id: i64,
        operation: &str,
        title: Option<&str>,
    ) -> ServiceResult<()> {
        self.ctx
            .activity_repo()
            .record(&NewActivity {
                feature: ActivityFeature::Game,
                username: username.to_string(),
                target_username: target.map(String::from),
                game_id: Some(game_id),
                data: title.map(|t| serde_json::json!({ "title": t })),
                operation: operation.to_string(),
            })
            .await?;
        Ok(())
    }
}
