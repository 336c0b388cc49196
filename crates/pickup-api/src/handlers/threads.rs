//! Thread and message handlers
//!
//! Endpoints for posting into a conversation by member set, replying by
//! thread id, viewing a thread, and per-viewer hiding.

use axum::{
    extract::{Path, State},
    Json,
};
use pickup_core::value_objects::ThreadId;
use pickup_service::{
    HiddenMessagesResponse, MessageResponse, MessageService, PostMessageRequest, ReplyRequest,
    ThreadResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

fn parse_thread_id(raw: &str) -> Result<ThreadId, ApiError> {
    ThreadId::parse(raw).map_err(|_| ApiError::invalid_path("Invalid thread id format"))
}

/// Post a message to the thread shared by a set of users, creating the
/// thread if it does not exist. The sender must be in the set.
///
/// POST /threads
pub async fn post_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<PostMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.services());
    let message = service
        .post(&request.usernames, &auth.username, &request.body)
        .await?;
    Ok(Created(Json(message)))
}

/// View a thread as the authenticated member
///
/// GET /threads/{thread_id}
pub async fn get_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
) -> ApiResult<Json<ThreadResponse>> {
    let thread_id = parse_thread_id(&thread_id)?;

    let service = MessageService::new(state.services());
    let thread = service.list_for_viewer(&thread_id, &auth.username).await?;
    Ok(Json(thread))
}

/// Reply within an existing thread
///
/// POST /threads/{thread_id}/messages
pub async fn reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ReplyRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let thread_id = parse_thread_id(&thread_id)?;

    let service = MessageService::new(state.services());
    let message = service
        .reply(&thread_id, &auth.username, &request.body)
        .await?;
    Ok(Created(Json(message)))
}

/// Hide the whole thread for the authenticated member only
///
/// DELETE /threads/{thread_id}
pub async fn hide_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(thread_id): Path<String>,
) -> ApiResult<Json<HiddenMessagesResponse>> {
    let thread_id = parse_thread_id(&thread_id)?;

    let service = MessageService::new(state.services());
    let hidden = service.hide_thread(&thread_id, &auth.username).await?;
    Ok(Json(hidden))
}

/// Hide one message for the authenticated member only
///
/// DELETE /messages/{message_id}
pub async fn hide_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(message_id): Path<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    let service = MessageService::new(state.services());
    let hidden_id = service.hide_message(message_id, &auth.username).await?;
    Ok(Json(serde_json::json!({ "message_id": hidden_id })))
}
