//! Reply Repository Implementation
//!
//! PostgreSQL implementation of the ReplyRepository trait.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AddReply, AddedReply, ReplyRepository, ReplyRow};
use crate::infrastructure::errors;
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

#[derive(Debug, sqlx::FromRow)]
struct AddedReplyRow {
    id: String,
    content: String,
    owner: String,
}

/// Reply joined with its owner's username.
#[derive(Debug, sqlx::FromRow)]
struct ReplyDetailRow {
    id: String,
    comment_id: String,
    username: String,
    date: DateTime<Utc>,
    content: String,
    deleted_at: Option<DateTime<Utc>>,
}

impl ReplyDetailRow {
    fn into_reply_row(self) -> ReplyRow {
        ReplyRow {
            id: self.id,
            comment_id: self.comment_id,
            username: self.username,
            date: self.date,
            content: self.content,
            deleted_at: self.deleted_at,
        }
    }
}

/// PostgreSQL reply repository implementation.
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
    ids: Arc<dyn IdGenerator>,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository with the given connection pool.
    pub fn new(pool: PgPool, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    async fn add_reply(&self, reply: &AddReply) -> Result<AddedReply, AppError> {
        let id = self.ids.prefixed("reply");

        let row = sqlx::query_as::<_, AddedReplyRow>(
            r#"
            INSERT INTO replies (id, content, owner, thread_id, comment_id, date, deleted_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NULL)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(&reply.content)
        .bind(&reply.owner)
        .bind(&reply.thread_id)
        .bind(&reply.comment_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedReply {
            id: row.id,
            content: row.content,
            owner: row.owner,
        })
    }

    async fn check_availability_reply(&self, reply_id: &str) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM replies WHERE id = $1)",
        )
        .bind(reply_id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(errors::reply_not_found());
        }

        Ok(())
    }

    async fn verify_reply_owner(&self, reply_id: &str, owner: &str) -> Result<(), AppError> {
        let owned = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM replies WHERE id = $1 AND owner = $2)",
        )
        .bind(reply_id)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        if !owned {
            return Err(errors::not_reply_owner());
        }

        Ok(())
    }

    async fn delete_reply(&self, reply_id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE replies SET deleted_at = NOW() WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_replies(&self, thread_id: &str) -> Result<Vec<ReplyRow>, AppError> {
        let rows = sqlx::query_as::<_, ReplyDetailRow>(
            r#"
            SELECT replies.id, replies.comment_id, users.username, replies.date,
                   replies.content, replies.deleted_at
            FROM replies
            JOIN users ON users.id = replies.owner
            WHERE replies.thread_id = $1
            ORDER BY replies.date ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_reply_row()).collect())
    }
}
