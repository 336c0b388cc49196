//! Game comment service
//!
//! Comments are soft-deleted per comment: removal hides them from every
//! viewer, unlike message tombstones.

use pickup_core::entities::ActivityFeature;
use pickup_core::error::DomainError;
use pickup_core::traits::NewActivity;
use tracing::{info, instrument};

use crate::dto::CommentResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Game comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on a game
    #[instrument(skip(self, body))]
    pub async fn add(
        &self,
        game_id: i64,
        author_username: &str,
        body: &str,
    ) -> ServiceResult<CommentResponse> {
        let game = self
            .ctx
            .game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or(DomainError::GameNotFound(game_id))?;
        if !game.is_active {
            return Err(DomainError::GameInactive(game_id).into());
        }

        let comment = self
            .ctx
            .comment_repo()
            .create(game_id, author_username, body)
            .await?;

        info!(comment_id = comment.id, game_id, author_username, "Comment added");

        self.ctx
            .activity_repo()
            .record(&NewActivity {
                feature: ActivityFeature::Comment,
                username: author_username.to_string(),
                target_username: None,
                game_id: Some(game_id),
                data: None,
                operation: "comment".to_string(),
            })
            .await?;

        Ok(CommentResponse::from(comment))
    }

    /// Active comments on a game, oldest first
    #[instrument(skip(self))]
    pub async fn list(&self, game_id: i64) -> ServiceResult<Vec<CommentResponse>> {
        if self.ctx.game_repo().find_by_id(game_id).await?.is_none() {
            return Err(DomainError::GameNotFound(game_id).into());
        }

        let comments = self.ctx.comment_repo().find_by_game(game_id).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// Soft-delete a comment. Only the author or an admin may remove it.
    #[instrument(skip(self))]
    pub async fn remove(
        &self,
        comment_id: i64,
        acting_username: &str,
        is_admin: bool,
    ) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if comment.author_username != acting_username && !is_admin {
            return Err(ServiceError::forbidden(
                "Only the comment author may remove it",
            ));
        }

        self.ctx.comment_repo().deactivate(comment_id).await?;

        info!(comment_id, acting_username, "Comment removed");

        Ok(())
    }
}
