//! User entities and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::InvariantError;
use crate::domain::payload::Payload;
use crate::shared::error::AppError;

/// Maximum username length, in characters.
pub const USERNAME_MAX_CHARS: usize = 50;

/// A registration request.
///
/// Username rules, checked after presence and type:
/// 1. at most [`USERNAME_MAX_CHARS`] characters;
/// 2. only ASCII letters, digits and `_`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl RegisterUser {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [username, password, fullname] = Payload::new(payload).strings(
            ["username", "password", "fullname"],
            InvariantError::RegisterUserMissingProperty,
            InvariantError::RegisterUserInvalidType,
        )?;

        if username.chars().count() > USERNAME_MAX_CHARS {
            return Err(InvariantError::RegisterUserUsernameTooLong);
        }

        if !is_word(&username) {
            return Err(InvariantError::RegisterUserUsernameRestrictedCharacter);
        }

        Ok(Self {
            username,
            password,
            fullname,
        })
    }

    /// The same registration carrying a hashed password instead of the plain one.
    pub fn with_password_hash(self, password_hash: String) -> Self {
        Self {
            password: password_hash,
            ..self
        }
    }
}

fn is_word(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A user as returned after registration. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

impl RegisteredUser {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [id, username, fullname] = Payload::new(payload).strings(
            ["id", "username", "fullname"],
            InvariantError::RegisteredUserMissingProperty,
            InvariantError::RegisteredUserInvalidType,
        )?;

        Ok(Self {
            id,
            username,
            fullname,
        })
    }
}

/// Login credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

impl UserLogin {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [username, password] = Payload::new(payload).strings(
            ["username", "password"],
            InvariantError::UserLoginMissingProperty,
            InvariantError::UserLoginInvalidType,
        )?;

        Ok(Self { username, password })
    }
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. `user.password` is already hashed.
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser, AppError>;

    /// Fail with [`AppError::BadRequest`] if the username is taken.
    async fn verify_available_username(&self, username: &str) -> Result<(), AppError>;

    /// Stored password hash for a username.
    async fn get_password_by_username(&self, username: &str) -> Result<String, AppError>;

    /// User id for a username.
    async fn get_id_by_username(&self, username: &str) -> Result<String, AppError>;
}
