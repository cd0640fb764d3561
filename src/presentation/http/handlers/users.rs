//! User Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{AddedUserResponse, ApiResponse};
use crate::presentation::http::extractors::JsonPayload;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<AddedUserResponse>>), AppError> {
    let added_user = state.users.register(&payload.into_value()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedUserResponse { added_user })),
    ))
}
