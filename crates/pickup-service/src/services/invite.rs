//! Invite lifecycle service
//!
//! Creates, queries, and transitions game invitations through the
//! `pending -> {accepted, denied, cancelled}` state machine, enforcing the
//! one-pending-invite-per-active-sender rule.

use pickup_core::entities::{ActivityFeature, Game, InviteStatus, User};
use pickup_core::error::DomainError;
use pickup_core::traits::{NewActivity, NewInvite};
use tracing::{info, instrument};

use crate::dto::InviteResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Invite lifecycle service
pub struct InviteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InviteService<'a> {
    /// Create a new InviteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a single pending invite
    #[instrument(skip(self))]
    pub async fn create(
        &self,
        game_id: i64,
        from_username: &str,
        to_username: &str,
    ) -> ServiceResult<InviteResponse> {
        self.require_active_game(game_id).await?;
        self.require_active_user(from_username).await?;
        self.validate_recipient(game_id, to_username).await?;

        let invite = self
            .ctx
            .invite_repo()
            .create(&NewInvite {
                game_id,
                from_username: from_username.to_string(),
                to_username: to_username.to_string(),
            })
            .await?;

        info!(invite_id = invite.id, game_id, from_username, to_username, "Invite created");

        self.record_activity(&invite.from_username, &invite.to_username, game_id, "invite")
            .await?;

        Ok(InviteResponse::from(invite))
    }

    /// Create one pending invite per recipient; the whole group commits
    /// together or not at all
    #[instrument(skip(self, usernames))]
    pub async fn create_group(
        &self,
        game_id: i64,
        from_username: &str,
        usernames: &[String],
    ) -> ServiceResult<Vec<InviteResponse>> {
        self.require_active_game(game_id).await?;
        self.require_active_user(from_username).await?;

        let mut seen = std::collections::BTreeSet::new();
        for to_username in usernames {
            if !seen.insert(to_username) {
                return Err(super::error::ServiceError::validation(format!(
                    "Duplicate recipient: {to_username}"
                )));
            }
            self.validate_recipient(game_id, to_username).await?;
        }

        let new_invites: Vec<NewInvite> = usernames
            .iter()
            .map(|to_username| NewInvite {
                game_id,
                from_username: from_username.to_string(),
                to_username: to_username.clone(),
            })
            .collect();

        let invites = self.ctx.invite_repo().create_many(&new_invites).await?;

        info!(game_id, from_username, count = invites.len(), "Group invites created");

        for invite in &invites {
            self.record_activity(&invite.from_username, &invite.to_username, game_id, "invite")
                .await?;
        }

        Ok(invites.into_iter().map(InviteResponse::from).collect())
    }

    /// Transition an invite to a new status.
    ///
    /// Only the recipient may accept or deny; only the sender may cancel.
    /// Terminal states never transition, and re-setting the current status
    /// is rejected. Accepting also enrolls the recipient in the game.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        invite_id: i64,
        acting_username: &str,
        new_status: &str,
    ) -> ServiceResult<InviteResponse> {
        let invite = self
            .ctx
            .invite_repo()
            .find_by_id(invite_id)
            .await?
            .ok_or(DomainError::InviteNotFound(invite_id))?;

        let status = InviteStatus::parse(new_status)
            .ok_or_else(|| DomainError::InvalidStatus(new_status.to_string()))?;

        if status == invite.status {
            return Err(DomainError::StatusUnchanged(status).into());
        }
        if invite.status.is_terminal() {
            return Err(DomainError::TerminalStatus(invite.status).into());
        }

        match status {
            InviteStatus::Cancelled => {
                if acting_username != invite.from_username {
                    return Err(DomainError::NotInviteSender(invite_id).into());
                }
            }
            InviteStatus::Accepted | InviteStatus::Denied => {
                if acting_username != invite.to_username {
                    return Err(DomainError::NotInviteRecipient(invite_id).into());
                }
            }
            InviteStatus::Pending => {
                // Unreachable: pending -> pending is StatusUnchanged and
                // terminal -> pending is TerminalStatus
            }
        }

        let updated = self.ctx.invite_repo().update_status(invite_id, status).await?;

        if status == InviteStatus::Accepted {
            self.ctx
                .game_repo()
                .add_player(updated.game_id, &updated.to_username)
                .await?;
        }

        info!(invite_id, status = %status, "Invite status updated");

        self.record_activity(
            acting_username,
            &updated.to_username,
            updated.game_id,
            status.as_str(),
        )
        .await?;

        Ok(InviteResponse::from(updated))
    }

    /// Invites for a game. The non-`all` form hides rows touching inactive
    /// users or inactive games.
    #[instrument(skip(self))]
    pub async fn game_invites(
        &self,
        game_id: i64,
        include_inactive: bool,
    ) -> ServiceResult<Vec<InviteResponse>> {
        self.require_game(game_id).await?;

        let invites = self
            .ctx
            .invite_repo()
            .find_by_game(game_id, include_inactive)
            .await?;
        Ok(invites.into_iter().map(InviteResponse::from).collect())
    }

    /// Invites a user has sent, newest first
    #[instrument(skip(self))]
    pub async fn sent(
        &self,
        username: &str,
        include_inactive: bool,
    ) -> ServiceResult<Vec<InviteResponse>> {
        self.require_user(username).await?;

        let invites = self
            .ctx
            .invite_repo()
            .find_sent(username, include_inactive)
            .await?;
        Ok(invites.into_iter().map(InviteResponse::from).collect())
    }

    /// Invites a user has received, newest first
    #[instrument(skip(self))]
    pub async fn received(
        &self,
        username: &str,
        include_inactive: bool,
    ) -> ServiceResult<Vec<InviteResponse>> {
        self.require_user(username).await?;

        let invites = self
            .ctx
            .invite_repo()
            .find_received(username, include_inactive)
            .await?;
        Ok(invites.into_iter().map(InviteResponse::from).collect())
    }

    /// Per-recipient validation shared by single and group creation
    async fn validate_recipient(&self, game_id: i64, to_username: &str) -> ServiceResult<()> {
        self.require_active_user(to_username).await?;

        // Pendings from deactivated senders do not block a fresh invite
        if self
            .ctx
            .invite_repo()
            .has_pending_from_active_sender(game_id, to_username)
            .await?
        {
            return Err(DomainError::PendingInviteExists {
                game_id,
                to_username: to_username.to_string(),
            }
            .into());
        }

        Ok(())
    }

    async fn require_user(&self, username: &str) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()).into())
    }

    async fn require_active_user(&self, username: &str) -> ServiceResult<User> {
        let user = self.require_user(username).await?;
        if !user.is_active {
            return Err(DomainError::UserInactive(username.to_string()).into());
        }
        Ok(user)
    }

    async fn require_game(&self, game_id: i64) -> ServiceResult<Game> {
        self.ctx
            .game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| DomainError::GameNotFound(game_id).into())
    }

    async fn require_active_game(&self, game_id: i64) -> ServiceResult<Game> {
        let game = self.require_game(game_id).await?;
        if !game.is_active {
            return Err(DomainError::GameInactive(game_id).into());
        }
        Ok(game)
    }

    async fn record_activity(
        &self,
        username: &str,
        target: &str,
        game_id: i64,
        operation: &str,
    ) -> ServiceResult<()> {
        self.ctx
            .activity_repo()
            .record(&NewActivity {
                feature: ActivityFeature::Invite,
                username: username.to_string(),
                target_username: Some(target.to_string()),
                game_id: Some(game_id),
                data: None,
                operation: operation.to_string(),
            })
            .await?;
        Ok(())
    }
}
