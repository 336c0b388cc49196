//! User handlers
//!
//! Endpoints for profiles, listings, search, activation, the activity
//! feed, and per-user thread/invite listings.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use pickup_service::{
    ActivityService, GameResponse, GameService, InviteResponse, InviteService, MessageService,
    ProfileResponse, ThreadListEntryResponse, UpdateUserRequest, UserActivityResponse,
    UserResponse, UserService,
};

use crate::extractors::AuthUser;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Query parameters for admin-style listings
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

/// Query parameters for invite listings
#[derive(Debug, Default, Deserialize)]
pub struct InviteListQuery {
    /// Include rows touching inactive users or games
    #[serde(default)]
    pub all: bool,
}

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// List users (admin); inactive accounts only when requested
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<ProfileResponse>>> {
    auth.ensure_admin()?;

    let service = UserService::new(state.services());
    let users = service.list_users(query.include_inactive).await?;
    Ok(Json(users))
}

/// Search users by similarity
///
/// GET /users/search?q=
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.services());
    let users = service.search(&query.q).await?;
    Ok(Json(users))
}

/// Public view of a user
///
/// GET /users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.services());
    let user = service.get_user(&username).await?;
    Ok(Json(user))
}

/// Full profile (self or admin)
///
/// GET /users/{username}/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    auth.ensure_self_or_admin(&username)?;

    let service = UserService::new(state.services());
    let profile = service.get_profile(&username).await?;
    Ok(Json(profile))
}

/// Patch profile fields (self or admin)
///
/// PATCH /users/{username}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    auth.ensure_self_or_admin(&username)?;

    let service = UserService::new(state.services());
    let profile = service.update_profile(&username, request).await?;
    Ok(Json(profile))
}

/// Deactivate an account (self or admin)
///
/// DELETE /users/{username}
pub async fn deactivate_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<NoContent> {
    auth.ensure_self_or_admin(&username)?;

    let service = UserService::new(state.services());
    service.deactivate(&username).await?;
    Ok(NoContent)
}

/// Reactivate an account (self or admin)
///
/// POST /users/{username}/reactivate
pub async fn reactivate_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<NoContent> {
    auth.ensure_self_or_admin(&username)?;

    let service = UserService::new(state.services());
    service.reactivate(&username).await?;
    Ok(NoContent)
}

/// The user's activity feed (self or admin)
///
/// GET /users/{username}/activity
pub async fn get_user_activity(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<UserActivityResponse>> {
    auth.ensure_self_or_admin(&username)?;

    let service = ActivityService::new(state.services());
    let activity = service.get_user_activity(&username).await?;
    Ok(Json(activity))
}

/// Active games the user plays in
///
/// GET /users/{username}/games
pub async fn get_user_games(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<GameResponse>>> {
    let service = GameService::new(state.services());
    let games = service.games_for_user(&username).await?;
    Ok(Json(games))
}

/// The user's threads, most recently active first (self or admin)
///
/// GET /users/{username}/threads
pub async fn get_user_threads(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<ThreadListEntryResponse>>> {
    auth.ensure_self_or_admin(&username)?;

    let service = MessageService::new(state.services());
    let threads = service.list_threads_for_user(&username).await?;
    Ok(Json(threads))
}

/// Invites the user has sent (self or admin)
///
/// GET /users/{username}/invites/sent
pub async fn get_invites_sent(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
    Query(query): Query<InviteListQuery>,
) -> ApiResult<Json<Vec<InviteResponse>>> {
    auth.ensure_self_or_admin(&username)?;

    let service = InviteService::new(state.services());
    let invites = service.sent(&username, query.all).await?;
    Ok(Json(invites))
}

/// Invites the user has received (self or admin)
///
/// GET /users/{username}/invites/received
pub async fn get_invites_received(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
    Query(query): Query<InviteListQuery>,
) -> ApiResult<Json<Vec<InviteResponse>>> {
    auth.ensure_self_or_admin(&username)?;

    let service = InviteService::new(state.services());
    let invites = service.received(&username, query.all).await?;
    Ok(Json(invites))
}
