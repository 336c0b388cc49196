//! Game handlers
//!
//! Endpoints for games, rosters, and game invites.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use pickup_service::{
    CreateGameRequest, GameResponse, GameService, InviteResponse, InviteService, UserResponse,
};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::handlers::users::{InviteListQuery, ListQuery};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a game
///
/// POST /games
pub async fn create_game(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGameRequest>,
) -> ApiResult<Created<Json<GameResponse>>> {
    let service = GameService::new(state.services());
    let game = service.create(&auth.username, request).await?;
    Ok(Created(Json(game)))
}

/// List games. The listing is public; the bearer token is decoded
/// opportunistically and only consulted when inactive games are requested,
/// which is an admin-only view.
///
/// GET /games
pub async fn list_games(
    State(state): State<AppState>,
    OptionalAuthUser(auth): OptionalAuthUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<GameResponse>>> {
    if query.include_inactive {
        auth.ok_or(ApiError::MissingAuth)?.ensure_admin()?;
    }

    let service = GameService::new(state.services());
    let games = service.list(query.include_inactive).await?;
    Ok(Json(games))
}

/// Fetch one game
///
/// GET /games/{game_id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
) -> ApiResult<Json<GameResponse>> {
    let service = GameService::new(state.services());
    let game = service.get(game_id).await?;
    Ok(Json(game))
}

/// Deactivate a game (creator or admin)
///
/// DELETE /games/{game_id}
pub async fn deactivate_game(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(game_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = GameService::new(state.services());
    service
        .deactivate(game_id, &auth.username, auth.is_admin)
        .await?;
    Ok(NoContent)
}

/// Join a game's roster
///
/// POST /games/{game_id}/join
pub async fn join_game(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(game_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = GameService::new(state.services());
    service.join(game_id, &auth.username).await?;
    Ok(NoContent)
}

/// Leave a game's roster
///
/// POST /games/{game_id}/leave
pub async fn leave_game(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(game_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = GameService::new(state.services());
    service.leave(game_id, &auth.username).await?;
    Ok(NoContent)
}

/// Roster of active players
///
/// GET /games/{game_id}/players
pub async fn get_players(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = GameService::new(state.services());
    let players = service.players(game_id).await?;
    Ok(Json(players))
}

/// Invites attached to a game
///
/// GET /games/{game_id}/invites
pub async fn get_game_invites(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(game_id): Path<i64>,
    Query(query): Query<InviteListQuery>,
) -> ApiResult<Json<Vec<InviteResponse>>> {
    let service = InviteService::new(state.services());
    let invites = service.game_invites(game_id, query.all).await?;
    Ok(Json(invites))
}
