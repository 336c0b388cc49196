//! # pickup-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    ActivityResponse, AuthResponse, CommentResponse, CreateCommentRequest, CreateGameRequest,
    CreateGroupInviteRequest, CreateInviteRequest, FollowToggleResponse, GameResponse,
    HealthResponse, HiddenMessagesResponse, InviteResponse, LoginRequest, MessageResponse,
    PostMessageRequest, ProfileResponse, ReadinessResponse, RegisterRequest, ReplyRequest,
    ThreadListEntryResponse, ThreadResponse, UpdateInviteRequest, UpdateUserRequest,
    UserActivityResponse, UserResponse,
};
pub use services::{
    ActivityService, AuthService, CommentService, FollowService, GameService, InviteService,
    MessageService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    ThreadService, UserService,
};
