//! Authentication entities and token store repository trait.
//!
//! Maps to the `authentications` table. Only refresh tokens are stored;
//! removing a row revokes the token.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::InvariantError;
use crate::domain::payload::Payload;
use crate::shared::error::AppError;

/// A freshly issued token pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuth {
    pub access_token: String,
    pub refresh_token: String,
}

impl NewAuth {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [access_token, refresh_token] = Payload::new(payload).strings(
            ["accessToken", "refreshToken"],
            InvariantError::NewAuthMissingProperty,
            InvariantError::NewAuthInvalidType,
        )?;

        Ok(Self {
            access_token,
            refresh_token,
        })
    }
}

/// Payload of a token refresh request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshAuthentication {
    pub refresh_token: String,
}

impl RefreshAuthentication {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [refresh_token] = Payload::new(payload).strings(
            ["refreshToken"],
            InvariantError::RefreshAuthenticationMissingToken,
            InvariantError::RefreshAuthenticationInvalidType,
        )?;

        Ok(Self { refresh_token })
    }
}

/// Payload of a logout request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAuthentication {
    pub refresh_token: String,
}

impl DeleteAuthentication {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [refresh_token] = Payload::new(payload).strings(
            ["refreshToken"],
            InvariantError::DeleteAuthenticationMissingToken,
            InvariantError::DeleteAuthenticationInvalidType,
        )?;

        Ok(Self { refresh_token })
    }
}

/// Repository trait for the refresh token store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    /// Store a refresh token verbatim.
    async fn add_token(&self, token: &str) -> Result<(), AppError>;

    /// Fail with [`AppError::InvalidToken`] if the token is not stored.
    async fn check_availability_token(&self, token: &str) -> Result<(), AppError>;

    /// Remove a stored token. Removing an absent token is not an error.
    async fn delete_token(&self, token: &str) -> Result<(), AppError>;
}
