//! Reply Service
//!
//! Adding and soft-deleting replies to comments.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{
    AddReply, AddedReply, CommentRepository, DeleteReply, ReplyRepository, ThreadRepository,
};
use crate::shared::error::AppError;

/// Reply service trait for dependency injection
#[async_trait]
pub trait ReplyService: Send + Sync {
    /// Reply to a comment: `{ thread_id, comment_id, content, owner }`
    async fn add_reply(&self, payload: &Value) -> Result<AddedReply, AppError>;

    /// Soft-delete an owned reply: `{ thread_id, comment_id, reply_id, owner }`
    async fn delete_reply(&self, payload: &Value) -> Result<(), AppError>;
}

/// ReplyService implementation
pub struct ReplyServiceImpl {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
}

impl ReplyServiceImpl {
    /// Create a new ReplyServiceImpl
    pub fn new(
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reply_repo: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            reply_repo,
        }
    }
}

#[async_trait]
impl ReplyService for ReplyServiceImpl {
    async fn add_reply(&self, payload: &Value) -> Result<AddedReply, AppError> {
        let reply = AddReply::new(payload)?;

        self.thread_repo
            .check_availability_thread(&reply.thread_id)
            .await?;
        self.comment_repo
            .check_availability_comment(&reply.comment_id)
            .await?;

        self.reply_repo.add_reply(&reply).await
    }

    async fn delete_reply(&self, payload: &Value) -> Result<(), AppError> {
        let DeleteReply {
            thread_id,
            comment_id,
            reply_id,
            owner,
        } = DeleteReply::new(payload)?;

        self.thread_repo.check_availability_thread(&thread_id).await?;
        self.comment_repo
            .check_availability_comment(&comment_id)
            .await?;
        self.reply_repo.check_availability_reply(&reply_id).await?;
        self.reply_repo.verify_reply_owner(&reply_id, &owner).await?;

        self.reply_repo.delete_reply(&reply_id).await
    }
}
