//! Security collaborators consumed by the use cases.
//!
//! Implementations live in `infrastructure::security`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Identity carried inside both access and refresh tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub id: String,
    pub username: String,
}

/// Password hashing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHash: Send + Sync {
    /// Produce a salted hash of `password`.
    async fn hash(&self, password: &str) -> Result<String, AppError>;

    /// Fail with [`AppError::Unauthorized`] unless `password` matches `hashed`.
    async fn compare_password(&self, password: &str, hashed: &str) -> Result<(), AppError>;
}

/// Signing and verification of access and refresh tokens.
#[cfg_attr(test, mockall::automock)]
pub trait AuthenticationTokenManager: Send + Sync {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String, AppError>;

    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, AppError>;

    /// Fail with [`AppError::InvalidToken`] if the refresh token signature is invalid.
    fn verify_refresh_token(&self, token: &str) -> Result<(), AppError>;

    /// Identity inside a refresh token.
    fn decode_payload(&self, token: &str) -> Result<TokenPayload, AppError>;

    /// Identity inside a valid, unexpired access token.
    fn verify_access_token(&self, token: &str) -> Result<TokenPayload, AppError>;
}
