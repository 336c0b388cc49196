//! Game comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use pickup_service::{CommentResponse, CommentService, CreateCommentRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Comment on a game
///
/// POST /games/{game_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(game_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.services());
    let comment = service.add(game_id, &auth.username, &request.body).await?;
    Ok(Created(Json(comment)))
}

/// Active comments on a game, oldest first
///
/// GET /games/{game_id}/comments
pub async fn get_comments(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.services());
    let comments = service.list(game_id).await?;
    Ok(Json(comments))
}

/// Remove a comment (author or admin)
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.services());
    service
        .remove(comment_id, &auth.username, auth.is_admin)
        .await?;
    Ok(NoContent)
}
