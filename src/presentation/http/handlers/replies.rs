//! Reply Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedReplyResponse, ApiResponse};
use crate::presentation::http::extractors::{AuthUser, JsonPayload};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Reply to a comment
pub async fn add_reply(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
    payload: JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<AddedReplyResponse>>), AppError> {
    let payload = payload.with([
        ("thread_id", thread_id.as_str()),
        ("comment_id", comment_id.as_str()),
        ("owner", user.id.as_str()),
    ]);
    let added_reply = state.replies.add_reply(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedReplyResponse { added_reply })),
    ))
}

/// Soft-delete one of the caller's replies
pub async fn delete_reply(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let payload = JsonPayload::default().with([
        ("thread_id", thread_id.as_str()),
        ("comment_id", comment_id.as_str()),
        ("reply_id", reply_id.as_str()),
        ("owner", user.id.as_str()),
    ]);
    state.replies.delete_reply(&payload).await?;

    Ok(Json(ApiResponse::empty()))
}
