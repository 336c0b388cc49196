//! Message ledger service
//!
//! Appends messages to threads and renders per-viewer filtered histories.
//! Hiding is a per-viewer overlay: a member tombstones a message for
//! themselves without affecting anyone else's view.

use pickup_core::error::DomainError;
use pickup_core::value_objects::ThreadId;
use tracing::{info, instrument};

use crate::dto::{
    HiddenMessagesResponse, MessageResponse, ThreadListEntryResponse, ThreadResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::thread::ThreadService;

/// Message ledger service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a message to the thread shared by `usernames`, creating the
    /// thread when it does not exist yet. The sender must be one of the
    /// participants.
    #[instrument(skip(self, body))]
    pub async fn post(
        &self,
        usernames: &[String],
        sender: &str,
        body: &str,
    ) -> ServiceResult<MessageResponse> {
        if !usernames.iter().any(|u| u == sender) {
            return Err(ServiceError::validation(
                "Sender must be a thread participant",
            ));
        }

        let thread_service = ThreadService::new(self.ctx);
        let thread_id = thread_service.get_or_create(usernames).await?;

        let message = self
            .ctx
            .message_repo()
            .create(&thread_id, sender, body)
            .await?;

        info!(thread_id = %thread_id, message_id = message.id, "Message posted");

        Ok(MessageResponse::from(message))
    }

    /// Reply within an existing thread
    #[instrument(skip(self, body))]
    pub async fn reply(
        &self,
        thread_id: &ThreadId,
        sender: &str,
        body: &str,
    ) -> ServiceResult<MessageResponse> {
        if self.ctx.user_repo().find_by_username(sender).await?.is_none() {
            return Err(DomainError::UserNotFound(sender.to_string()).into());
        }
        self.require_membership(thread_id, sender).await?;

        let message = self
            .ctx
            .message_repo()
            .create(thread_id, sender, body)
            .await?;

        info!(thread_id = %thread_id, message_id = message.id, "Reply posted");

        Ok(MessageResponse::from(message))
    }

    /// Render a thread for one viewer: the full roster plus every message
    /// the viewer has not hidden, oldest first
    #[instrument(skip(self))]
    pub async fn list_for_viewer(
        &self,
        thread_id: &ThreadId,
        viewer: &str,
    ) -> ServiceResult<ThreadResponse> {
        if self.ctx.user_repo().find_by_username(viewer).await?.is_none() {
            return Err(DomainError::UserNotFound(viewer.to_string()).into());
        }
        self.require_membership(thread_id, viewer).await?;

        let members = self.ctx.thread_repo().members(thread_id).await?;
        let messages = self
            .ctx
            .message_repo()
            .find_visible(thread_id, viewer)
            .await?;

        Ok(ThreadResponse {
            thread_id: thread_id.to_string(),
            members: members.iter().map(UserResponse::from).collect(),
            messages: messages.into_iter().map(MessageResponse::from).collect(),
        })
    }

    /// Hide every remaining message in the thread for this viewer only;
    /// returns the ids that were newly hidden
    #[instrument(skip(self))]
    pub async fn hide_thread(
        &self,
        thread_id: &ThreadId,
        viewer: &str,
    ) -> ServiceResult<HiddenMessagesResponse> {
        if self.ctx.user_repo().find_by_username(viewer).await?.is_none() {
            return Err(DomainError::UserNotFound(viewer.to_string()).into());
        }
        self.require_membership(thread_id, viewer).await?;

        let message_ids = self
            .ctx
            .message_repo()
            .hide_thread(thread_id, viewer)
            .await?;

        info!(thread_id = %thread_id, hidden = message_ids.len(), "Thread hidden for viewer");

        Ok(HiddenMessagesResponse { message_ids })
    }

    /// Hide a single message for this viewer only
    #[instrument(skip(self))]
    pub async fn hide_message(&self, message_id: i64, viewer: &str) -> ServiceResult<i64> {
        let message = self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or(DomainError::MessageNotFound(message_id))?;

        // Non-members get the same answer as for a message that does not
        // exist
        if !self
            .ctx
            .thread_repo()
            .is_member(&message.thread_id, viewer)
            .await?
        {
            return Err(DomainError::MessageNotFound(message_id).into());
        }

        self.ctx.message_repo().hide(message_id, viewer).await?;

        info!(message_id, viewer, "Message hidden for viewer");

        Ok(message_id)
    }

    /// List the user's threads, each with its most recent message still
    /// visible to them, most recent first. Threads where the user has
    /// hidden everything do not appear.
    #[instrument(skip(self))]
    pub async fn list_threads_for_user(
        &self,
        username: &str,
    ) -> ServiceResult<Vec<ThreadListEntryResponse>> {
        if self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .is_none()
        {
            return Err(DomainError::UserNotFound(username.to_string()).into());
        }

        let summaries = self.ctx.thread_repo().find_for_user(username).await?;

        let mut entries = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let members = self.ctx.thread_repo().members(&summary.thread_id).await?;

            entries.push(ThreadListEntryResponse {
                thread_id: summary.thread_id.to_string(),
                members: members.iter().map(UserResponse::from).collect(),
                last_message: MessageResponse::from(summary.last_message),
            });
        }

        Ok(entries)
    }

    /// Membership gate shared by the thread-scoped operations. Outsiders
    /// cannot distinguish a thread they are excluded from and one that
    /// does not exist.
    async fn require_membership(&self, thread_id: &ThreadId, username: &str) -> ServiceResult<()> {
        if !self.ctx.thread_repo().exists(thread_id).await? {
            return Err(DomainError::ThreadNotFound(thread_id.clone()).into());
        }
        if !self.ctx.thread_repo().is_member(thread_id, username).await? {
            return Err(DomainError::ThreadNotFound(thread_id.clone()).into());
        }
        Ok(())
    }
}
