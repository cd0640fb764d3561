//! Comment Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedCommentResponse, ApiResponse};
use crate::presentation::http::extractors::{AuthUser, JsonPayload};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Comment on a thread
pub async fn add_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(thread_id): Path<String>,
    payload: JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<AddedCommentResponse>>), AppError> {
    let payload = payload.with([
        ("owner", user.id.as_str()),
        ("thread_id", thread_id.as_str()),
    ]);
    let added_comment = state.comments.add_comment(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedCommentResponse { added_comment })),
    ))
}

/// Soft-delete one of the caller's comments
pub async fn delete_comment(
    State(state): State<AppState>,
    user: AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let payload = JsonPayload::default().with([
        ("thread_id", thread_id.as_str()),
        ("comment_id", comment_id.as_str()),
        ("owner", user.id.as_str()),
    ]);
    state.comments.delete_comment(&payload).await?;

    Ok(Json(ApiResponse::empty()))
}
