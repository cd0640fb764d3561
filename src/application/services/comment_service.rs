//! Comment Service
//!
//! Adding and soft-deleting comments on a thread.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{AddComment, AddedComment, CommentRepository, DeleteComment, ThreadRepository};
use crate::shared::error::AppError;

/// Comment service trait for dependency injection
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Comment on a thread: `{ owner, thread_id, content }`
    async fn add_comment(&self, payload: &Value) -> Result<AddedComment, AppError>;

    /// Soft-delete an owned comment: `{ thread_id, comment_id, owner }`
    async fn delete_comment(&self, payload: &Value) -> Result<(), AppError>;
}

/// CommentService implementation
pub struct CommentServiceImpl {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
}

impl CommentServiceImpl {
    /// Create a new CommentServiceImpl
    pub fn new(
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
        }
    }
}

#[async_trait]
impl CommentService for CommentServiceImpl {
    async fn add_comment(&self, payload: &Value) -> Result<AddedComment, AppError> {
        let comment = AddComment::new(payload)?;

        self.thread_repo
            .check_availability_thread(&comment.thread_id)
            .await?;

        self.comment_repo.add_comment(&comment).await
    }

    async fn delete_comment(&self, payload: &Value) -> Result<(), AppError> {
        let DeleteComment {
            thread_id,
            comment_id,
            owner,
        } = DeleteComment::new(payload)?;

        self.thread_repo.check_availability_thread(&thread_id).await?;
        self.comment_repo
            .check_availability_comment(&comment_id)
            .await?;
        self.comment_repo
            .verify_comment_owner(&comment_id, &owner)
            .await?;

        self.comment_repo.delete_comment(&comment_id).await
    }
}
