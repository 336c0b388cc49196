//! Activity aggregator service
//!
//! Produces a viewer's feed by reading the per-feature audit tables. No
//! events are synthesized here; rows are written by the mutating services.

use pickup_core::error::DomainError;
use tracing::instrument;

use crate::dto::{ActivityResponse, UserActivityResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Activity aggregator service
pub struct ActivityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActivityService<'a> {
    /// Create a new ActivityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The viewer's feed: events from active accounts they follow, plus
    /// their own events, each newest first
    #[instrument(skip(self))]
    pub async fn get_user_activity(&self, username: &str) -> ServiceResult<UserActivityResponse> {
        if self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .is_none()
        {
            return Err(DomainError::UserNotFound(username.to_string()).into());
        }

        let my_activity = self.ctx.activity_repo().find_for_user(username).await?;
        let activity = self.ctx.activity_repo().find_followed(username).await?;

        Ok(UserActivityResponse {
            activity: activity.into_iter().map(ActivityResponse::from).collect(),
            my_activity: my_activity
                .into_iter()
                .map(ActivityResponse::from)
                .collect(),
        })
    }
}
