//! Authentication Repository Implementation
//!
//! PostgreSQL token store for refresh tokens.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::AuthenticationRepository;
use crate::infrastructure::errors;
use crate::shared::error::AppError;

/// PostgreSQL refresh token store.
#[derive(Clone)]
pub struct PgAuthenticationRepository {
    pool: PgPool,
}

impl PgAuthenticationRepository {
    /// Create a new PgAuthenticationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthenticationRepository for PgAuthenticationRepository {
    async fn add_token(&self, token: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> Result<(), AppError> {
        let stored = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM authentications WHERE token = $1)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        if !stored {
            return Err(errors::refresh_token_not_found());
        }

        Ok(())
    }

    async fn delete_token(&self, token: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
