//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{Activity, ActivityFeature, Game, GameComment, Invite, InviteStatus, Message, User};
use crate::error::DomainError;
use crate::value_objects::{ThreadId, UserField};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Input for user creation. The id is the username itself; the password
/// hash travels separately and never appears on the entity.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub city: String,
    pub state: String,
    pub image: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub is_private: bool,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by username (active or not)
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// List users, newest first; inactive accounts only when requested
    async fn find_all(&self, include_inactive: bool) -> RepoResult<Vec<User>>;

    /// Which of the given usernames correspond to existing accounts
    /// (existence only - active and inactive alike)
    async fn find_existing(&self, usernames: &[String]) -> RepoResult<Vec<String>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Check if an email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Apply a validated set of profile field changes in one statement
    async fn update_fields(
        &self,
        username: &str,
        changes: &[(UserField, serde_json::Value)],
    ) -> RepoResult<User>;

    /// Flip the active flag (deactivate / reactivate)
    async fn set_active(&self, username: &str, active: bool) -> RepoResult<()>;

    /// Rank active, non-private users by trigram similarity to the query
    async fn search(&self, query: &str) -> RepoResult<Vec<User>>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>>;
}

// ============================================================================
// Game Repository
// ============================================================================

/// Input for game creation
#[derive(Debug, Clone)]
pub struct NewGame {
    pub title: String,
    pub description: String,
    pub location: String,
    pub game_time: DateTime<Utc>,
    pub creator_username: String,
}

#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Find game by id (active or not)
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Game>>;

    /// List games, newest first; inactive games only when requested
    async fn find_all(&self, include_inactive: bool) -> RepoResult<Vec<Game>>;

    /// List active games a user plays in, newest first
    async fn find_by_player(&self, username: &str) -> RepoResult<Vec<Game>>;

    /// Create a new game
    async fn create(&self, game: &NewGame) -> RepoResult<Game>;

    /// Flip the active flag
    async fn set_active(&self, id: i64, active: bool) -> RepoResult<()>;

    /// Enroll a user on the roster (no-op when already enrolled)
    async fn add_player(&self, game_id: i64, username: &str) -> RepoResult<()>;

    /// Remove a user from the roster
    async fn remove_player(&self, game_id: i64, username: &str) -> RepoResult<()>;

    /// Roster of active users, alphabetical by username
    async fn players(&self, game_id: i64) -> RepoResult<Vec<User>>;

    /// Check roster membership
    async fn is_player(&self, game_id: i64, username: &str) -> RepoResult<bool>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Toggle the (followed, follower) edge: create it when absent, remove
    /// it when present. Returns true when the edge exists afterwards.
    async fn toggle(&self, followed: &str, follower: &str) -> RepoResult<bool>;

    /// Active users following `username`, alphabetical
    async fn followers(&self, username: &str) -> RepoResult<Vec<User>>;

    /// Active users that `username` follows, alphabetical
    async fn following(&self, username: &str) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by id (active only)
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<GameComment>>;

    /// Active comments on a game, oldest first
    async fn find_by_game(&self, game_id: i64) -> RepoResult<Vec<GameComment>>;

    /// Create a new comment
    async fn create(&self, game_id: i64, author: &str, body: &str) -> RepoResult<GameComment>;

    /// Soft-delete a comment for all viewers
    async fn deactivate(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Invite Repository
// ============================================================================

/// Input for invite creation; status always starts at pending
#[derive(Debug, Clone)]
pub struct NewInvite {
    pub game_id: i64,
    pub from_username: String,
    pub to_username: String,
}

#[async_trait]
pub trait InviteRepository: Send + Sync {
    /// Find invite by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Invite>>;

    /// Create a single pending invite
    async fn create(&self, invite: &NewInvite) -> RepoResult<Invite>;

    /// Create a batch of pending invites in one transaction; a failure
    /// anywhere leaves no rows committed
    async fn create_many(&self, invites: &[NewInvite]) -> RepoResult<Vec<Invite>>;

    /// Whether the recipient already has a pending invite for this game
    /// from a currently active sender
    async fn has_pending_from_active_sender(
        &self,
        game_id: i64,
        to_username: &str,
    ) -> RepoResult<bool>;

    /// Set the invite status
    async fn update_status(&self, id: i64, status: InviteStatus) -> RepoResult<Invite>;

    /// Invites for a game, newest first. Unless `include_inactive`, rows
    /// touching an inactive user or inactive game are projected away.
    async fn find_by_game(&self, game_id: i64, include_inactive: bool) -> RepoResult<Vec<Invite>>;

    /// Invites sent by a user, newest first, same inactive filtering
    async fn find_sent(&self, username: &str, include_inactive: bool) -> RepoResult<Vec<Invite>>;

    /// Invites received by a user, newest first, same inactive filtering
    async fn find_received(&self, username: &str, include_inactive: bool)
        -> RepoResult<Vec<Invite>>;
}

// ============================================================================
// Thread Repository
// ============================================================================

/// A thread together with the most recent message the owning query's
/// viewer can still see
#[derive(Debug, Clone)]
pub struct ThreadSummary {
    pub thread_id: ThreadId,
    pub last_message: Message,
}

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Find the thread whose member set equals `usernames` exactly
    /// (order-independent). The unique member-set invariant guarantees at
    /// most one match.
    async fn find_by_member_set(&self, usernames: &[String]) -> RepoResult<Option<ThreadId>>;

    /// Persist a new thread and one membership row per username in a
    /// single transaction
    async fn create(&self, id: &ThreadId, usernames: &[String]) -> RepoResult<()>;

    /// Check a thread exists
    async fn exists(&self, id: &ThreadId) -> RepoResult<bool>;

    /// Full member roster with display fields, alphabetical
    async fn members(&self, id: &ThreadId) -> RepoResult<Vec<User>>;

    /// Check thread membership
    async fn is_member(&self, id: &ThreadId, username: &str) -> RepoResult<bool>;

    /// Threads the user belongs to that still have at least one message
    /// visible to them, ordered by last visible message recency descending
    async fn find_for_user(&self, username: &str) -> RepoResult<Vec<ThreadSummary>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Message>>;

    /// Append a message to a thread
    async fn create(&self, thread_id: &ThreadId, sender: &str, body: &str) -> RepoResult<Message>;

    /// Messages in a thread the viewer has not tombstoned, in creation
    /// order ascending
    async fn find_visible(&self, thread_id: &ThreadId, viewer: &str) -> RepoResult<Vec<Message>>;

    /// Tombstone one message for this viewer only (idempotent)
    async fn hide(&self, message_id: i64, viewer: &str) -> RepoResult<()>;

    /// Tombstone every not-yet-hidden message in the thread for this
    /// viewer; returns the newly hidden message ids
    async fn hide_thread(&self, thread_id: &ThreadId, viewer: &str) -> RepoResult<Vec<i64>>;
}

// ============================================================================
// Activity Repository
// ============================================================================

/// Input for an audit row, routed to its per-feature table
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub feature: ActivityFeature,
    pub username: String,
    pub target_username: Option<String>,
    pub game_id: Option<i64>,
    pub data: Option<serde_json::Value>,
    pub operation: String,
}

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Append one audit row
    async fn record(&self, activity: &NewActivity) -> RepoResult<()>;

    /// Union of all features where the user is the primary actor, newest first
    async fn find_for_user(&self, username: &str) -> RepoResult<Vec<Activity>>;

    /// Union of all features whose primary actor is an active account the
    /// viewer follows, newest first
    async fn find_followed(&self, username: &str) -> RepoResult<Vec<Activity>>;
}
