//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the issued access token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: ProfileResponse,
}

impl AuthResponse {
    pub fn new(access_token: String, expires_in: i64, user: ProfileResponse) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user response (display fields only)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_on: DateTime<Utc>,
}

/// Full profile response (own account and admin listings)
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub email: String,
    pub is_active: bool,
    pub is_private: bool,
    pub created_on: DateTime<Utc>,
}

// ============================================================================
// Game Responses
// ============================================================================

/// Game response with derived scheduling status
#[derive(Debug, Clone, Serialize)]
pub struct GameResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub game_time: DateTime<Utc>,
    pub creator_username: String,
    pub is_active: bool,
    /// "pending" (today or future) or "resolved" (past)
    pub status: &'static str,
    pub created_on: DateTime<Utc>,
}

/// Comment on a game
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub game_id: i64,
    pub author_username: String,
    pub body: String,
    pub created_on: DateTime<Utc>,
}

// ============================================================================
// Follow Responses
// ============================================================================

/// Result of a follow toggle
#[derive(Debug, Serialize)]
pub struct FollowToggleResponse {
    pub followed_username: String,
    pub follower_username: String,
    /// Whether the follow edge exists after the toggle
    pub following: bool,
}

// ============================================================================
// Invite Responses
// ============================================================================

/// Invite response
#[derive(Debug, Clone, Serialize)]
pub struct InviteResponse {
    pub id: i64,
    pub game_id: i64,
    pub from_username: String,
    pub to_username: String,
    pub status: &'static str,
    pub created_on: DateTime<Utc>,
}

// ============================================================================
// Thread / Message Responses
// ============================================================================

/// A single message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub thread_id: String,
    pub sender_username: String,
    pub body: String,
    pub created_on: DateTime<Utc>,
}

/// A thread rendered for one viewer: roster plus the messages that viewer
/// has not hidden
#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    pub thread_id: String,
    pub members: Vec<UserResponse>,
    pub messages: Vec<MessageResponse>,
}

/// One row of a user's thread listing
#[derive(Debug, Serialize)]
pub struct ThreadListEntryResponse {
    pub thread_id: String,
    pub members: Vec<UserResponse>,
    pub last_message: MessageResponse,
}

/// Message ids newly hidden by a hide-thread call
#[derive(Debug, Serialize)]
pub struct HiddenMessagesResponse {
    pub message_ids: Vec<i64>,
}

// ============================================================================
// Activity Responses
// ============================================================================

/// A single feed event
#[derive(Debug, Clone, Serialize)]
pub struct ActivityResponse {
    pub feature: &'static str,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    pub operation: String,
    pub created_on: DateTime<Utc>,
}

/// The viewer's feed: followed users' events plus their own
#[derive(Debug, Serialize)]
pub struct UserActivityResponse {
    pub activity: Vec<ActivityResponse>,
    pub my_activity: Vec<ActivityResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            ready: database,
            database,
        }
    }
}
