//! Thread resolver service
//!
//! Maps a set of usernames to its single canonical thread, creating one
//! when none exists. Threads are identified by exact member-set equality,
//! never subset or superset.

use std::collections::BTreeSet;

use pickup_core::error::DomainError;
use pickup_core::value_objects::ThreadId;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Thread resolver service
pub struct ThreadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThreadService<'a> {
    /// Create a new ThreadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate that the input is a proper set of at least two usernames
    /// and that every one of them names an existing account (active or
    /// not). Returns the set in canonical (sorted) order.
    pub(crate) async fn validate_member_set(
        &self,
        usernames: &[String],
    ) -> ServiceResult<Vec<String>> {
        let unique: BTreeSet<String> = usernames.iter().cloned().collect();
        if unique.len() != usernames.len() {
            return Err(ServiceError::validation(
                "Thread participants must be distinct",
            ));
        }
        if unique.len() < 2 {
            return Err(ServiceError::validation(
                "A thread needs at least two participants",
            ));
        }

        let existing: BTreeSet<String> = self
            .ctx
            .user_repo()
            .find_existing(usernames)
            .await?
            .into_iter()
            .collect();
        let missing: Vec<String> = unique
            .iter()
            .filter(|u| !existing.contains(u.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::UsersNotFound(missing).into());
        }

        Ok(unique.into_iter().collect())
    }

    /// Find the thread whose member set equals `usernames` exactly
    #[instrument(skip(self))]
    pub async fn resolve(&self, usernames: &[String]) -> ServiceResult<Option<ThreadId>> {
        let members = self.validate_member_set(usernames).await?;

        let thread_id = self.ctx.thread_repo().find_by_member_set(&members).await?;
        Ok(thread_id)
    }

    /// Find the thread for this member set, creating it when absent
    #[instrument(skip(self))]
    pub async fn get_or_create(&self, usernames: &[String]) -> ServiceResult<ThreadId> {
        let members = self.validate_member_set(usernames).await?;

        if let Some(existing) = self.ctx.thread_repo().find_by_member_set(&members).await? {
            return Ok(existing);
        }

        let thread_id = ThreadId::generate();
        self.ctx.thread_repo().create(&thread_id, &members).await?;

        info!(thread_id = %thread_id, members = members.len(), "Thread created");

        Ok(thread_id)
    }
}
