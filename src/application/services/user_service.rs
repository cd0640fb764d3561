//! User Service
//!
//! Handles user registration.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::security::PasswordHash;
use crate::domain::{RegisterUser, RegisteredUser, UserRepository};
use crate::shared::error::AppError;

/// User service trait for dependency injection
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user from a raw `{ username, password, fullname }` payload
    async fn register(&self, payload: &Value) -> Result<RegisteredUser, AppError>;
}

/// UserService implementation
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepository>,
    password_hash: Arc<dyn PasswordHash>,
}

impl UserServiceImpl {
    /// Create a new UserServiceImpl
    pub fn new(user_repo: Arc<dyn UserRepository>, password_hash: Arc<dyn PasswordHash>) -> Self {
        Self {
            user_repo,
            password_hash,
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn register(&self, payload: &Value) -> Result<RegisteredUser, AppError> {
        let registration = RegisterUser::new(payload)?;

        self.user_repo
            .verify_available_username(&registration.username)
            .await?;

        let hashed = self.password_hash.hash(&registration.password).await?;
        let registration = registration.with_password_hash(hashed);

        self.user_repo.add_user(&registration).await
    }
}
