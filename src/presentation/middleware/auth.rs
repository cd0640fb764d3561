//! Authentication Middleware
//!
//! Bearer token validation for protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    RequestPartsExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::presentation::http::extractors::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Verify the access token and insert the [`AuthUser`] into request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();

    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AppError::Unauthorized("Missing authentication".into()))?;

    let payload = state.token_manager.verify_access_token(bearer.token())?;

    let mut request = Request::from_parts(parts, body);
    request.extensions_mut().insert(AuthUser {
        id: payload.id,
        username: payload.username,
    });

    Ok(next.run(request).await)
}
