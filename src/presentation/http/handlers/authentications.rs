//! Authentication Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{AccessTokenResponse, ApiResponse, LoginResponse};
use crate::presentation::http::extractors::JsonPayload;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Login with username and password
pub async fn login(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> Result<(StatusCode, Json<ApiResponse<LoginResponse>>), AppError> {
    let tokens = state.auth.login(&payload.into_value()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(tokens))))
}

/// Exchange a refresh token for a new access token
pub async fn refresh(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> Result<Json<ApiResponse<AccessTokenResponse>>, AppError> {
    let access_token = state.auth.refresh(&payload.into_value()).await?;

    Ok(Json(ApiResponse::success(AccessTokenResponse {
        access_token,
    })))
}

/// Revoke a refresh token
pub async fn logout(
    State(state): State<AppState>,
    payload: JsonPayload,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.auth.logout(&payload.into_value()).await?;

    Ok(Json(ApiResponse::empty()))
}
