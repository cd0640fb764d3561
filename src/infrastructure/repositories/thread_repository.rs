//! Thread Repository Implementation
//!
//! PostgreSQL implementation of the ThreadRepository trait.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AddThread, AddedThread, ThreadRepository, ThreadRow};
use crate::infrastructure::errors;
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

#[derive(Debug, sqlx::FromRow)]
struct AddedThreadRow {
    id: String,
    title: String,
    owner: String,
}

/// Thread joined with its owner's username.
#[derive(Debug, sqlx::FromRow)]
struct ThreadDetailRow {
    id: String,
    title: String,
    body: String,
    date: DateTime<Utc>,
    username: String,
}

impl ThreadDetailRow {
    fn into_thread_row(self) -> ThreadRow {
        ThreadRow {
            id: self.id,
            title: self.title,
            body: self.body,
            date: self.date,
            username: self.username,
        }
    }
}

/// PostgreSQL thread repository implementation.
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository with the given connection pool.
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn add_thread(&self, thread: &AddThread) -> Result<AddedThread, AppError> {
        let id = self.ids.prefixed("thread");

        let row = sqlx::query_as::<_, AddedThreadRow>(
            r#"
            INSERT INTO threads (id, title, body, owner, date)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, title, owner
            "#,
        )
        .bind(&id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(&thread.owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedThread {
            id: row.id,
            title: row.title,
            owner: row.owner,
        })
    }

    async fn check_availability_thread(&self, thread_id: &str) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)",
        )
        .bind(thread_id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(errors::thread_not_found());
        }

        Ok(())
    }

    async fn get_thread(&self, thread_id: &str) -> Result<ThreadRow, AppError> {
        let row = sqlx::query_as::<_, ThreadDetailRow>(
            r#"
            SELECT threads.id, threads.title, threads.body, threads.date, users.username
            FROM threads
            JOIN users ON users.id = threads.owner
            WHERE threads.id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(errors::thread_not_found)?;

        Ok(row.into_thread_row())
    }
}
