use async_trait::async_trait;

use super::MemoryStore;
use crate::domain::AuthenticationRepository;
use crate::infrastructure::errors;
use crate::shared::error::AppError;

#[async_trait]
impl AuthenticationRepository for MemoryStore {
    async fn add_token(&self, token: &str) -> Result<(), AppError> {
        self.tables.write().tokens.push(token.to_owned());
        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> Result<(), AppError> {
        if !self.tables.read().tokens.iter().any(|t| t == token) {
            return Err(errors::refresh_token_not_found());
        }

        Ok(())
    }

    async fn delete_token(&self, token: &str) -> Result<(), AppError> {
        self.tables.write().tokens.retain(|t| t != token);
        Ok(())
    }
}
