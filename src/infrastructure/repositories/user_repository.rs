//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{RegisterUser, RegisteredUser, UserRepository};
use crate::infrastructure::errors;
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

/// Database row returned by inserts: the user without the password.
#[derive(Debug, sqlx::FromRow)]
struct RegisteredUserRow {
    id: String,
    username: String,
    fullname: String,
}

impl RegisteredUserRow {
    fn into_registered_user(self) -> RegisteredUser {
        RegisteredUser {
            id: self.id,
            username: self.username,
            fullname: self.fullname,
        }
    }
}

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser, AppError> {
        let id = self.ids.prefixed("user");

        let row = sqlx::query_as::<_, RegisteredUserRow>(
            r#"
            INSERT INTO users (id, username, password, fullname)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, fullname
            "#,
        )
        .bind(&id)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.fullname)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                errors::username_taken()
            }
            _ => AppError::Database(e),
        })?;

        Ok(row.into_registered_user())
    }

    async fn verify_available_username(&self, username: &str) -> Result<(), AppError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        if taken {
            return Err(errors::username_taken());
        }

        Ok(())
    }

    async fn get_password_by_username(&self, username: &str) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>("SELECT password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(errors::username_not_found)
    }

    async fn get_id_by_username(&self, username: &str) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(errors::user_not_found)
    }
}
