//! Application Error Types
//!
//! Centralized error type shared by every layer. Variants are tagged with an
//! [`ErrorKind`]; only the HTTP boundary turns kinds into status codes.

use crate::domain::InvariantError;

/// Failure category used by the transport layer to pick an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Client input broke an entity invariant or a repository-level rule.
    Invariant,
    /// Refresh token is malformed, unsigned or no longer in the token store.
    InvalidToken,
    /// Caller could not be authenticated.
    Authentication,
    /// Caller is authenticated but does not own the resource.
    Authorization,
    /// Referenced resource does not exist.
    NotFound,
    /// Storage or crypto failure.
    Internal,
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] InvariantError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => ErrorKind::Invariant,
            Self::InvalidToken(_) => ErrorKind::InvalidToken,
            Self::Unauthorized(_) => ErrorKind::Authentication,
            Self::Forbidden(_) => ErrorKind::Authorization,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Internal(_) | Self::Database(_) => ErrorKind::Internal,
        }
    }

    /// Message safe to show to the caller.
    ///
    /// Invariant violations are translated to their template; internal
    /// failures never leak their details.
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation(violation) => violation.message().to_owned(),
            Self::BadRequest(msg)
            | Self::InvalidToken(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg) => msg.clone(),
            Self::Internal(_) | Self::Database(_) => "terjadi kegagalan pada server kami".into(),
        }
    }

    /// The invariant violation carried by this error, if any.
    pub fn violation(&self) -> Option<InvariantError> {
        match self {
            Self::Validation(violation) => Some(*violation),
            _ => None,
        }
    }
}
