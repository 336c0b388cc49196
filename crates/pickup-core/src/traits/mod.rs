//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ActivityRepository, CommentRepository, FollowRepository, GameRepository, InviteRepository,
    MessageRepository, NewActivity, NewGame, NewInvite, NewUser, RepoResult, ThreadRepository,
    ThreadSummary, UserRepository,
};
