//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those with structural rules
//! also implement `Validate` for input validation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 64, message = "First name must be 1-64 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 64, message = "Last name must be 1-64 characters"))]
    pub last_name: String,

    pub birth_date: NaiveDate,

    #[validate(length(min = 1, max = 64, message = "City must be 1-64 characters"))]
    pub city: String,

    #[validate(length(min = 2, max = 32, message = "State must be 2-32 characters"))]
    pub state: String,

    pub image: Option<String>,

    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[serde(default)]
    pub is_private: bool,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Partial profile update. Arrives as a free-form key/value map; every key
/// is checked against the patchable-field allow-list before any statement
/// is built, and unknown keys are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

// ============================================================================
// Game Requests
// ============================================================================

/// Create game request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGameRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: String,

    pub game_time: DateTime<Utc>,
}

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub body: String,
}

// ============================================================================
// Invite Requests
// ============================================================================

/// Create a single invite; the sender is the authenticated user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInviteRequest {
    pub game_id: i64,

    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub to_username: String,
}

/// Create a batch of invites; all succeed together or none do
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGroupInviteRequest {
    pub game_id: i64,

    #[validate(length(min = 1, message = "At least one recipient is required"))]
    pub usernames: Vec<String>,
}

/// Transition an invite to a new status
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateInviteRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

// ============================================================================
// Thread / Message Requests
// ============================================================================

/// Start (or continue) a conversation with an exact set of participants.
/// The sender must appear in `usernames`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostMessageRequest {
    #[validate(length(min = 2, message = "A thread needs at least two participants"))]
    pub usernames: Vec<String>,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub body: String,
}

/// Reply within an existing thread
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplyRequest {
    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub body: String,
}
