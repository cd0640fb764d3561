//! HTTP Error Mapping
//!
//! Turns [`AppError`] into a status code and a `{ status, message }` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::dto::ErrorResponse;
use crate::shared::error::{AppError, ErrorKind};

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Invariant | ErrorKind::InvalidToken => StatusCode::BAD_REQUEST,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Authorization => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = status_for(kind);

        let body = if kind == ErrorKind::Internal {
            tracing::error!(error = %self, "Request failed");
            ErrorResponse {
                status: "error",
                message: self.client_message(),
            }
        } else {
            ErrorResponse {
                status: "fail",
                message: self.client_message(),
            }
        };

        (status, Json(body)).into_response()
    }
}
