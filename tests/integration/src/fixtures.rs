//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub city: String,
    pub state: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        // Process id keeps usernames unique across test binaries sharing
        // one database
        let pid = std::process::id();
        Self {
            username: format!("player{pid}x{suffix}"),
            first_name: "Test".to_string(),
            last_name: format!("Player{suffix}"),
            birth_date: "1995-04-02".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            email: format!("player{pid}x{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: ProfileResponse,
}

/// Full profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
}

/// Create game request
#[derive(Debug, Serialize)]
pub struct CreateGameRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub game_time: String,
}

impl CreateGameRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Pickup game {suffix}"),
            description: "Casual 5v5".to_string(),
            location: "Zilker Park".to_string(),
            // Far future keeps the game pending for every test run
            game_time: "2040-06-01T18:00:00Z".to_string(),
        }
    }
}

/// Game response
#[derive(Debug, Deserialize)]
pub struct GameResponse {
    pub id: i64,
    pub title: String,
    pub creator_username: String,
    pub is_active: bool,
    pub status: String,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub game_id: i64,
    pub author_username: String,
    pub body: String,
}

/// Invite response
#[derive(Debug, Deserialize)]
pub struct InviteResponse {
    pub id: i64,
    pub game_id: i64,
    pub from_username: String,
    pub to_username: String,
    pub status: String,
}

/// Follow toggle response
#[derive(Debug, Deserialize)]
pub struct FollowToggleResponse {
    pub followed_username: String,
    pub follower_username: String,
    pub following: bool,
}

/// Message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: i64,
    pub thread_id: String,
    pub sender_username: String,
    pub body: String,
}

/// Public user response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub username: String,
}

/// Thread view for one viewer
#[derive(Debug, Deserialize)]
pub struct ThreadResponse {
    pub thread_id: String,
    pub members: Vec<UserResponse>,
    pub messages: Vec<MessageResponse>,
}

/// One row of a thread listing
#[derive(Debug, Deserialize)]
pub struct ThreadListEntryResponse {
    pub thread_id: String,
    pub members: Vec<UserResponse>,
    pub last_message: MessageResponse,
}

/// Newly hidden message ids
#[derive(Debug, Deserialize)]
pub struct HiddenMessagesResponse {
    pub message_ids: Vec<i64>,
}

/// A single feed event
#[derive(Debug, Deserialize)]
pub struct ActivityResponse {
    pub feature: String,
    pub username: String,
    pub operation: String,
}

/// The viewer's feed
#[derive(Debug, Deserialize)]
pub struct UserActivityResponse {
    pub activity: Vec<ActivityResponse>,
    pub my_activity: Vec<ActivityResponse>,
}
