//! Invite entity <-> model mapper

use pickup_core::entities::{Invite, InviteStatus};

use crate::models::InviteModel;

/// Convert database status string to InviteStatus enum
fn parse_invite_status(status: &str) -> InviteStatus {
    InviteStatus::parse(status).unwrap_or(InviteStatus::Pending)
}

/// Convert InviteStatus enum to database string
pub fn invite_status_to_str(status: InviteStatus) -> &'static str {
    status.as_str()
}

impl From<InviteModel> for Invite {
    fn from(model: InviteModel) -> Self {
        Invite {
            id: model.id,
            game_id: model.game_id,
            from_username: model.from_username,
            to_username: model.to_username,
            status: parse_invite_status(&model.status),
            created_on: model.created_on,
        }
    }
}
