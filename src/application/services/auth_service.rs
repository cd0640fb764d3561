//! Authentication Service
//!
//! Handles login, access token refresh and logout. Refresh tokens are valid
//! while they are present in the token store; logout removes them.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::application::security::{AuthenticationTokenManager, PasswordHash, TokenPayload};
use crate::domain::{
    AuthenticationRepository, DeleteAuthentication, NewAuth, RefreshAuthentication, UserLogin,
    UserRepository,
};
use crate::shared::error::AppError;

/// Authentication service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate with `{ username, password }` and issue a token pair
    async fn login(&self, payload: &Value) -> Result<NewAuth, AppError>;

    /// Issue a new access token for `{ refreshToken }`
    async fn refresh(&self, payload: &Value) -> Result<String, AppError>;

    /// Revoke `{ refreshToken }`
    async fn logout(&self, payload: &Value) -> Result<(), AppError>;
}

/// AuthService implementation
pub struct AuthServiceImpl {
    user_repo: Arc<dyn UserRepository>,
    auth_repo: Arc<dyn AuthenticationRepository>,
    password_hash: Arc<dyn PasswordHash>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl AuthServiceImpl {
    /// Create a new AuthServiceImpl
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        auth_repo: Arc<dyn AuthenticationRepository>,
        password_hash: Arc<dyn PasswordHash>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            user_repo,
            auth_repo,
            password_hash,
            token_manager,
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, payload: &Value) -> Result<NewAuth, AppError> {
        let credentials = UserLogin::new(payload)?;

        let hashed = self
            .user_repo
            .get_password_by_username(&credentials.username)
            .await?;

        self.password_hash
            .compare_password(&credentials.password, &hashed)
            .await?;

        let id = self
            .user_repo
            .get_id_by_username(&credentials.username)
            .await?;

        let identity = TokenPayload {
            id,
            username: credentials.username,
        };
        let access_token = self.token_manager.create_access_token(&identity)?;
        let refresh_token = self.token_manager.create_refresh_token(&identity)?;

        let auth = NewAuth::new(&json!({
            "accessToken": access_token,
            "refreshToken": refresh_token,
        }))?;

        self.auth_repo.add_token(&auth.refresh_token).await?;

        Ok(auth)
    }

    async fn refresh(&self, payload: &Value) -> Result<String, AppError> {
        let RefreshAuthentication { refresh_token } = RefreshAuthentication::new(payload)?;

        self.token_manager.verify_refresh_token(&refresh_token)?;
        self.auth_repo
            .check_availability_token(&refresh_token)
            .await?;

        let identity = self.token_manager.decode_payload(&refresh_token)?;

        self.token_manager.create_access_token(&identity)
    }

    async fn logout(&self, payload: &Value) -> Result<(), AppError> {
        let DeleteAuthentication { refresh_token } = DeleteAuthentication::new(payload)?;

        self.auth_repo
            .check_availability_token(&refresh_token)
            .await?;

        self.auth_repo.delete_token(&refresh_token).await
    }
}
