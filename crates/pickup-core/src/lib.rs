//! # pickup-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Activity, ActivityFeature, Game, GameComment, GameStatus, Invite, InviteStatus, Message, User,
};
pub use error::DomainError;
pub use traits::{
    ActivityRepository, CommentRepository, FollowRepository, GameRepository, InviteRepository,
    MessageRepository, NewActivity, NewGame, NewInvite, NewUser, RepoResult, ThreadRepository,
    ThreadSummary, UserRepository,
};
pub use value_objects::{ThreadId, ThreadIdParseError, UserField};
