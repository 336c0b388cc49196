//! Authentication service
//!
//! Handles user registration and login. Access tokens carry the username
//! and admin flag; there is no refresh-token rotation.

use pickup_common::auth::{hash_password, validate_password_strength, verify_password};
use pickup_common::AppError;
use pickup_core::error::DomainError;
use pickup_core::traits::NewUser;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, ProfileResponse, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(ServiceError::conflict("Username already taken"));
        }

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let new_user = NewUser {
            username: request.username,
            first_name: request.first_name,
            last_name: request.last_name,
            birth_date: request.birth_date,
            city: request.city,
            state: request.state,
            image: request.image,
            phone: request.phone,
            email: request.email,
            is_private: request.is_private,
        };

        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(username = %user.username, "User registered successfully");

        let access_token = self
            .ctx
            .jwt_service()
            .issue_access_token(&user.username, user.is_admin)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            access_token,
            self.ctx.jwt_service().access_token_expiry(),
            ProfileResponse::from(&user),
        ))
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // A deactivated account exists but may not authenticate
        if !user.is_active {
            return Err(DomainError::UserInactive(user.username).into());
        }

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&user.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %user.username, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(username = %user.username, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(username = %user.username, "User logged in successfully");

        let access_token = self
            .ctx
            .jwt_service()
            .issue_access_token(&user.username, user.is_admin)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            access_token,
            self.ctx.jwt_service().access_token_expiry(),
            ProfileResponse::from(&user),
        ))
    }
}
