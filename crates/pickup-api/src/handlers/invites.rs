//! Invite handlers
//!
//! Endpoints for invite creation and the status state machine.

use axum::{
    extract::{Path, State},
    Json,
};
use pickup_service::{
    CreateGroupInviteRequest, CreateInviteRequest, InviteResponse, InviteService,
    UpdateInviteRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create an invite; the sender is the authenticated account
///
/// POST /invites
pub async fn create_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateInviteRequest>,
) -> ApiResult<Created<Json<InviteResponse>>> {
    let service = InviteService::new(state.services());
    let invite = service
        .create(request.game_id, &auth.username, &request.to_username)
        .await?;
    Ok(Created(Json(invite)))
}

/// Create a batch of invites; all succeed or none are committed
///
/// POST /invites/group
pub async fn create_group_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGroupInviteRequest>,
) -> ApiResult<Created<Json<Vec<InviteResponse>>>> {
    let service = InviteService::new(state.services());
    let invites = service
        .create_group(request.game_id, &auth.username, &request.usernames)
        .await?;
    Ok(Created(Json(invites)))
}

/// Transition an invite's status: cancel as sender, accept/deny as
/// recipient
///
/// PATCH /invites/{invite_id}
pub async fn update_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(invite_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateInviteRequest>,
) -> ApiResult<Json<InviteResponse>> {
    let service = InviteService::new(state.services());
    let invite = service
        .update(invite_id, &auth.username, &request.status)
        .await?;
    Ok(Json(invite))
}
