//! User service
//!
//! Profile reads, patch-style updates against the field allow-list,
//! activation flips, and trigram search.

use pickup_core::entities::User;
use pickup_core::error::DomainError;
use pickup_core::value_objects::UserField;
use tracing::{info, instrument};

use crate::dto::{ProfileResponse, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public view of a user. A deactivated account is reported as
    /// inactive, not missing.
    #[instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> ServiceResult<UserResponse> {
        let user = self.require_user(username).await?;
        if !user.is_active {
            return Err(DomainError::UserInactive(username.to_string()).into());
        }
        Ok(UserResponse::from(&user))
    }

    /// Full profile, for the account owner or an admin
    #[instrument(skip(self))]
    pub async fn get_profile(&self, username: &str) -> ServiceResult<ProfileResponse> {
        let user = self.require_user(username).await?;
        Ok(ProfileResponse::from(&user))
    }

    /// Admin-style listing; inactive accounts appear only when requested
    #[instrument(skip(self))]
    pub async fn list_users(&self, include_inactive: bool) -> ServiceResult<Vec<ProfileResponse>> {
        let users = self.ctx.user_repo().find_all(include_inactive).await?;
        Ok(users.iter().map(ProfileResponse::from).collect())
    }

    /// Apply a partial profile update. Every key in the patch map must be
    /// on the allow-list; an unknown key rejects the whole request.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        username: &str,
        request: UpdateUserRequest,
    ) -> ServiceResult<ProfileResponse> {
        let mut changes = Vec::with_capacity(request.fields.len());
        for (key, value) in &request.fields {
            let field = UserField::from_key(key)
                .ok_or_else(|| DomainError::UnknownField(key.clone()))?;
            changes.push((field, value.clone()));
        }

        if changes.is_empty() {
            return Err(ServiceError::validation("No fields to update"));
        }

        let user = self
            .ctx
            .user_repo()
            .update_fields(username, &changes)
            .await?;

        info!(username, fields = changes.len(), "Profile updated");

        Ok(ProfileResponse::from(&user))
    }

    /// Deactivate an account. The row stays; every non-admin read path
    /// stops seeing it.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, username: &str) -> ServiceResult<()> {
        self.require_user(username).await?;
        self.ctx.user_repo().set_active(username, false).await?;

        info!(username, "User deactivated");
        Ok(())
    }

    /// Reactivate a previously deactivated account
    #[instrument(skip(self))]
    pub async fn reactivate(&self, username: &str) -> ServiceResult<()> {
        self.require_user(username).await?;
        self.ctx.user_repo().set_active(username, true).await?;

        info!(username, "User reactivated");
        Ok(())
    }

    /// Similarity-ranked search over active, non-private accounts
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> ServiceResult<Vec<UserResponse>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::validation("Search query must not be empty"));
        }

        let users = self.ctx.user_repo().search(query).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    async fn require_user(&self, username: &str) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()).into())
    }
}
