//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services. The
//! store handle and secrets are constructed once at startup and passed in
//! explicitly; nothing is reached as ambient module state.

use std::sync::Arc;

use pickup_common::auth::JwtService;
use pickup_core::traits::{
    ActivityRepository, CommentRepository, FollowRepository, GameRepository, InviteRepository,
    MessageRepository, ThreadRepository, UserRepository,
};
use pickup_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (exposed for health probes)
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    game_repo: Arc<dyn GameRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    invite_repo: Arc<dyn InviteRepository>,
    thread_repo: Arc<dyn ThreadRepository>,
    message_repo: Arc<dyn MessageRepository>,
    activity_repo: Arc<dyn ActivityRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        game_repo: Arc<dyn GameRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        invite_repo: Arc<dyn InviteRepository>,
        thread_repo: Arc<dyn ThreadRepository>,
        message_repo: Arc<dyn MessageRepository>,
        activity_repo: Arc<dyn ActivityRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            game_repo,
            follow_repo,
            comment_repo,
            invite_repo,
            thread_repo,
            message_repo,
            activity_repo,
            jwt_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the game repository
    pub fn game_repo(&self) -> &dyn GameRepository {
        self.game_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the invite repository
    pub fn invite_repo(&self) -> &dyn InviteRepository {
        self.invite_repo.as_ref()
    }

    /// Get the thread repository
    pub fn thread_repo(&self) -> &dyn ThreadRepository {
        self.thread_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the activity repository
    pub fn activity_repo(&self) -> &dyn ActivityRepository {
        self.activity_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    game_repo: Option<Arc<dyn GameRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    invite_repo: Option<Arc<dyn InviteRepository>>,
    thread_repo: Option<Arc<dyn ThreadRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    activity_repo: Option<Arc<dyn ActivityRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn game_repo(mut self, repo: Arc<dyn GameRepository>) -> Self {
        self.game_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn invite_repo(mut self, repo: Arc<dyn InviteRepository>) -> Self {
        self.invite_repo = Some(repo);
        self
    }

    pub fn thread_repo(mut self, repo: Arc<dyn ThreadRepository>) -> Self {
        self.thread_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn activity_repo(mut self, repo: Arc<dyn ActivityRepository>) -> Self {
        self.activity_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.game_repo.ok_or_else(|| ServiceError::validation("game_repo is required"))?,
            self.follow_repo.ok_or_else(|| ServiceError::validation("follow_repo is required"))?,
            self.comment_repo.ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.invite_repo.ok_or_else(|| ServiceError::validation("invite_repo is required"))?,
            self.thread_repo.ok_or_else(|| ServiceError::validation("thread_repo is required"))?,
            self.message_repo.ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.activity_repo.ok_or_else(|| ServiceError::validation("activity_repo is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}
