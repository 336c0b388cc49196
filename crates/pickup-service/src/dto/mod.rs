//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateCommentRequest, CreateGameRequest, CreateGroupInviteRequest, CreateInviteRequest,
    LoginRequest, PostMessageRequest, RegisterRequest, ReplyRequest, UpdateInviteRequest,
    UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    ActivityResponse, AuthResponse, CommentResponse, FollowToggleResponse, GameResponse,
    HealthResponse, HiddenMessagesResponse, InviteResponse, MessageResponse, ProfileResponse,
    ReadinessResponse, ThreadListEntryResponse, ThreadResponse, UserActivityResponse,
    UserResponse,
};
