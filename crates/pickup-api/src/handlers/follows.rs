//! Follow handlers
//!
//! Endpoints for the follow toggle and follower/following listings.

use axum::{
    extract::{Path, State},
    Json,
};
use pickup_service::{FollowService, FollowToggleResponse, UserResponse};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle following a user; the follower is the authenticated account
///
/// POST /users/{username}/follow
pub async fn toggle_follow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<FollowToggleResponse>> {
    let service = FollowService::new(state.services());
    let response = service.toggle(&username, &auth.username).await?;
    Ok(Json(response))
}

/// Active accounts following this user
///
/// GET /users/{username}/followers
pub async fn get_followers(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = FollowService::new(state.services());
    let users = service.followers(&username).await?;
    Ok(Json(users))
}

/// Active accounts this user follows
///
/// GET /users/{username}/following
pub async fn get_following(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = FollowService::new(state.services());
    let users = service.following(&username).await?;
    Ok(Json(users))
}
