//! Comment Repository Implementation
//!
//! PostgreSQL implementation of the CommentRepository trait.
//! Deletion is soft: `deleted_at` is stamped and the row stays.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AddComment, AddedComment, CommentRepository, CommentRow};
use crate::infrastructure::errors;
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

#[derive(Debug, sqlx::FromRow)]
struct AddedCommentRow {
    id: String,
    content: String,
    owner: String,
}

/// Comment joined with its owner's username.
#[derive(Debug, sqlx::FromRow)]
struct CommentDetailRow {
    id: String,
    username: String,
    date: DateTime<Utc>,
    content: String,
    deleted_at: Option<DateTime<Utc>>,
}

impl CommentDetailRow {
    fn into_comment_row(self) -> CommentRow {
        CommentRow {
            id: self.id,
            username: self.username,
            date: self.date,
            content: self.content,
            deleted_at: self.deleted_at,
        }
    }
}

/// PostgreSQL comment repository implementation.
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository with the given connection pool.
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn add_comment(&self, comment: &AddComment) -> Result<AddedComment, AppError> {
        let id = self.ids.prefixed("comment");

        let row = sqlx::query_as::<_, AddedCommentRow>(
            r#"
            INSERT INTO comments (id, content, owner, thread_id, date, deleted_at)
            VALUES ($1, $2, $3, $4, NOW(), NULL)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(&comment.content)
        .bind(&comment.owner)
        .bind(&comment.thread_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedComment {
            id: row.id,
            content: row.content,
            owner: row.owner,
        })
    }

    async fn check_availability_comment(&self, comment_id: &str) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)",
        )
        .bind(comment_id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(errors::comment_not_found());
        }

        Ok(())
    }

    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<(), AppError> {
        let owned = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1 AND owner = $2)",
        )
        .bind(comment_id)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        if !owned {
            return Err(errors::not_comment_owner());
        }

        Ok(())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE comments SET deleted_at = NOW() WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_comments(&self, thread_id: &str) -> Result<Vec<CommentRow>, AppError> {
        let rows = sqlx::query_as::<_, CommentDetailRow>(
            r#"
            SELECT comments.id, users.username, comments.date, comments.content, comments.deleted_at
            FROM comments
            JOIN users ON users.id = comments.owner
            WHERE comments.thread_id = $1
            ORDER BY comments.date ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_comment_row()).collect())
    }
}
