//! # pickup-db
//!
//! PostgreSQL layer: SQLx models, entity mappers, and implementations of
//! the repository traits from `pickup-core`, plus connection pool
//! management and the schema migrations under `migrations/`.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgActivityRepository, PgCommentRepository, PgFollowRepository, PgGameRepository,
    PgInviteRepository, PgMessageRepository, PgThreadRepository, PgUserRepository,
};
