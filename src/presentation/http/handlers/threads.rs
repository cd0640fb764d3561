//! Thread Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedThreadResponse, ApiResponse, ThreadResponse};
use crate::presentation::http::extractors::{AuthUser, JsonPayload};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a thread owned by the caller
pub async fn add_thread(
    State(state): State<AppState>,
    user: AuthUser,
    payload: JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<AddedThreadResponse>>), AppError> {
    let payload = payload.with([("owner", user.id.as_str())]);
    let added_thread = state.threads.add_thread(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedThreadResponse { added_thread })),
    ))
}

/// Thread detail with comments and replies
pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<ApiResponse<ThreadResponse>>, AppError> {
    let thread = state.threads.get_thread(&thread_id).await?;

    Ok(Json(ApiResponse::success(ThreadResponse { thread })))
}
