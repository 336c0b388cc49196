//! PostgreSQL repository implementations

mod activity;
mod comment;
mod error;
mod follow;
mod game;
mod invite;
mod message;
mod thread;
mod user;

pub use activity::PgActivityRepository;
pub use comment::PgCommentRepository;
pub use follow::PgFollowRepository;
pub use game::PgGameRepository;
pub use invite::PgInviteRepository;
pub use message::PgMessageRepository;
pub use thread::PgThreadRepository;
pub use user::PgUserRepository;
