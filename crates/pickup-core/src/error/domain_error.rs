//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::InviteStatus;
use crate::value_objects::ThreadId;

/// Domain layer errors. Four client-visible kinds (not-found, inactive,
/// validation, authorization) plus wrapped infrastructure failures; the
/// classifiers below drive the HTTP status mapping 1:1.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Users not found: {}", .0.join(", "))]
    UsersNotFound(Vec<String>),

    #[error("Game not found: {0}")]
    GameNotFound(i64),

    #[error("Invite not found: {0}")]
    InviteNotFound(i64),

    #[error("Thread not found: {0}")]
    ThreadNotFound(ThreadId),

    #[error("Message not found: {0}")]
    MessageNotFound(i64),

    #[error("Comment not found: {0}")]
    CommentNotFound(i64),

    // =========================================================================
    // Inactive Errors
    // =========================================================================
    // The entity exists but is administratively disabled; callers must be
    // able to tell this apart from "never existed".
    #[error("User is inactive: {0}")]
    UserInactive(String),

    #[error("Game is inactive: {0}")]
    GameInactive(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid invite status: {0}")]
    InvalidStatus(String),

    #[error("Invite already has status: {0}")]
    StatusUnchanged(InviteStatus),

    #[error("Invite status is terminal: {0}")]
    TerminalStatus(InviteStatus),

    #[error("User {to_username} already has a pending invite for game {game_id}")]
    PendingInviteExists { game_id: i64, to_username: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the sender may cancel invite {0}")]
    NotInviteSender(i64),

    #[error("Only the recipient may respond to invite {0}")]
    NotInviteRecipient(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::UsersNotFound(_) => "UNKNOWN_USERS",
            Self::GameNotFound(_) => "UNKNOWN_GAME",
            Self::InviteNotFound(_) => "UNKNOWN_INVITE",
            Self::ThreadNotFound(_) => "UNKNOWN_THREAD",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Inactive
            Self::UserInactive(_) => "USER_INACTIVE",
            Self::GameInactive(_) => "GAME_INACTIVE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::StatusUnchanged(_) => "STATUS_UNCHANGED",
            Self::TerminalStatus(_) => "STATUS_TERMINAL",
            Self::PendingInviteExists { .. } => "PENDING_INVITE_EXISTS",
            Self::UnknownField(_) => "UNKNOWN_FIELD",

            // Authorization
            Self::NotInviteSender(_) => "NOT_INVITE_SENDER",
            Self::NotInviteRecipient(_) => "NOT_INVITE_RECIPIENT",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::UsersNotFound(_)
                | Self::GameNotFound(_)
                | Self::InviteNotFound(_)
                | Self::ThreadNotFound(_)
                | Self::MessageNotFound(_)
                | Self::CommentNotFound(_)
        )
    }

    /// Check if this is an "exists but disabled" error
    pub fn is_inactive(&self) -> bool {
        matches!(self, Self::UserInactive(_) | Self::GameInactive(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidStatus(_)
                | Self::StatusUnchanged(_)
                | Self::TerminalStatus(_)
                | Self::PendingInviteExists { .. }
                | Self::UnknownField(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotInviteSender(_) | Self::NotInviteRecipient(_))
    }
}
