//! Error handling utilities for repositories

use pickup_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(username: &str) -> DomainError {
    DomainError::UserNotFound(username.to_string())
}

/// Create a "game not found" error
pub fn game_not_found(id: i64) -> DomainError {
    DomainError::GameNotFound(id)
}

/// Create an "invite not found" error
pub fn invite_not_found(id: i64) -> DomainError {
    DomainError::InviteNotFound(id)
}

/// Create a "comment not found" error
pub fn comment_not_found(id: i64) -> DomainError {
    DomainError::CommentNotFound(id)
}
