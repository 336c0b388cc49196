//! Follow service
//!
//! The follow edge is a pure state toggle: one operation creates the edge
//! when absent and removes it when present.

use pickup_core::entities::ActivityFeature;
use pickup_core::error::DomainError;
use pickup_core::traits::NewActivity;
use tracing::{info, instrument};

use crate::dto::{FollowToggleResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the follower's edge towards `followed_username`
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        followed_username: &str,
        follower_username: &str,
    ) -> ServiceResult<FollowToggleResponse> {
        if followed_username == follower_username {
            return Err(ServiceError::validation("Cannot follow yourself"));
        }

        let followed = self
            .ctx
            .user_repo()
            .find_by_username(followed_username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(followed_username.to_string()))?;
        if !followed.is_active {
            return Err(DomainError::UserInactive(followed_username.to_string()).into());
        }

        let following = self
            .ctx
            .follow_repo()
            .toggle(followed_username, follower_username)
            .await?;

        info!(followed_username, follower_username, following, "Follow toggled");

        self.ctx
            .activity_repo()
            .record(&NewActivity {
                feature: ActivityFeature::Follow,
                username: follower_username.to_string(),
                target_username: Some(followed_username.to_string()),
                game_id: None,
                data: None,
                operation: if following { "follow" } else { "unfollow" }.to_string(),
            })
            .await?;

        Ok(FollowToggleResponse {
            followed_username: followed_username.to_string(),
            follower_username: follower_username.to_string(),
            following,
        })
    }

    /// Active accounts following this user
    #[instrument(skip(self))]
    pub async fn followers(&self, username: &str) -> ServiceResult<Vec<UserResponse>> {
        self.require_user(username).await?;

        let users = self.ctx.follow_repo().followers(username).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Active accounts this user follows
    #[instrument(skip(self))]
    pub async fn following(&self, username: &str) -> ServiceResult<Vec<UserResponse>> {
        self.require_user(username).await?;

        let users = self.ctx.follow_repo().following(username).await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    async fn require_user(&self, username: &str) -> ServiceResult<()> {
        if self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .is_none()
        {
            return Err(DomainError::UserNotFound(username.to_string()).into());
        }
        Ok(())
    }
}
