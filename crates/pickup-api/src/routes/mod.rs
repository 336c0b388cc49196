//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, comments, follows, games, health, invites, threads, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(game_routes())
        .merge(invite_routes())
        .merge(thread_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/search", get(users::search_users))
        .route("/users/:username", get(users::get_user))
        .route("/users/:username", patch(users::update_user))
        .route("/users/:username", delete(users::deactivate_user))
        .route("/users/:username/profile", get(users::get_profile))
        .route("/users/:username/reactivate", post(users::reactivate_user))
        // Follow graph
        .route("/users/:username/follow", post(follows::toggle_follow))
        .route("/users/:username/followers", get(follows::get_followers))
        .route("/users/:username/following", get(follows::get_following))
        // Feed and per-user listings
        .route("/users/:username/activity", get(users::get_user_activity))
        .route("/users/:username/games", get(users::get_user_games))
        .route("/users/:username/threads", get(users::get_user_threads))
        .route("/users/:username/invites/sent", get(users::get_invites_sent))
        .route(
            "/users/:username/invites/received",
            get(users::get_invites_received),
        )
}

/// Game routes
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/games", post(games::create_game))
        .route("/games", get(games::list_games))
        .route("/games/:game_id", get(games::get_game))
        .route("/games/:game_id", delete(games::deactivate_game))
        .route("/games/:game_id/join", post(games::join_game))
        .route("/games/:game_id/leave", post(games::leave_game))
        .route("/games/:game_id/players", get(games::get_players))
        // Game comments
        .route("/games/:game_id/comments", post(comments::create_comment))
        .route("/games/:game_id/comments", get(comments::get_comments))
        .route("/comments/:comment_id", delete(comments::delete_comment))
        // Game invites
        .route("/games/:game_id/invites", get(games::get_game_invites))
}

/// Invite routes
fn invite_routes() -> Router<AppState> {
    Router::new()
        .route("/invites", post(invites::create_invite))
        .route("/invites/group", post(invites::create_group_invite))
        .route("/invites/:invite_id", patch(invites::update_invite))
}

/// Thread and message routes
fn thread_routes() -> Router<AppState> {
    Router::new()
        .route("/threads", post(threads::post_message))
        .route("/threads/:thread_id", get(threads::get_thread))
        .route("/threads/:thread_id", delete(threads::hide_thread))
        .route("/threads/:thread_id/messages", post(threads::reply))
        .route("/messages/:message_id", delete(threads::hide_message))
}
