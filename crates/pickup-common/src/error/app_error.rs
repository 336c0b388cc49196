//! Application error types
//!
//! Shared error type for the non-domain failure modes: authentication,
//! infrastructure, and configuration. Domain errors pass through
//! transparently and keep their own status mapping.

use pickup_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status code for this error. Domain kinds map 1:1: not-found
    /// 404, inactive 403, validation 400, authorization 401.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired => 401,
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_inactive() {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_authorization() {
                    401
                } else {
                    500
                }
            }
        }
    }

    /// Stable error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidCredentials.status_code(), 401);
        assert_eq!(AppError::Validation("x".to_string()).status_code(), 400);
        assert_eq!(AppError::Database("x".to_string()).status_code(), 500);
    }

    #[test]
    fn test_domain_kinds_pass_through() {
        assert_eq!(AppError::from(DomainError::GameNotFound(1)).status_code(), 404);
        assert_eq!(
            AppError::from(DomainError::GameInactive(1)).status_code(),
            403
        );
        assert_eq!(
            AppError::from(DomainError::UnknownField("x".to_string())).status_code(),
            400
        );
        assert_eq!(
            AppError::from(DomainError::NotInviteSender(1)).status_code(),
            401
        );
    }

    #[test]
    fn test_is_client_error() {
        assert!(AppError::InvalidCredentials.is_client_error());
        assert!(!AppError::Database("x".to_string()).is_client_error());
    }
}
