//! Custom Extractors
//!
//! Axum extractors for the authenticated caller and raw JSON payloads.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde_json::{Map, Value};

use crate::shared::error::AppError;

/// Authenticated caller, placed in request extensions by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Missing authentication".into()))
    }
}

/// Request body as an untyped JSON object.
///
/// Entities do their own validation, so the body is not deserialized into a
/// struct here. An empty body, or any JSON value that is not an object, is
/// read as an empty object.
#[derive(Debug, Clone, Default)]
pub struct JsonPayload(pub Map<String, Value>);

impl JsonPayload {
    /// Overlay server-side fields (path params, owner) on the body.
    pub fn with<const N: usize>(mut self, fields: [(&str, &str); N]) -> Value {
        for (key, value) in fields {
            self.0.insert(key.to_owned(), Value::String(value.to_owned()));
        }
        Value::Object(self.0)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(fields)) => Ok(Self(fields)),
            Ok(_) => Ok(Self::default()),
            Err(e) => Err(AppError::BadRequest(format!("Invalid JSON body: {}", e))),
        }
    }
}
