//! Thread Service
//!
//! Thread creation and the full thread view with comments and replies.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::aggregation::{assemble, ThreadDetail};
use crate::domain::{AddThread, AddedThread, CommentRepository, ReplyRepository, ThreadRepository};
use crate::shared::error::AppError;

/// Thread service trait for dependency injection
#[async_trait]
pub trait ThreadService: Send + Sync {
    /// Create a thread from `{ title, body, owner }`
    async fn add_thread(&self, payload: &Value) -> Result<AddedThread, AppError>;

    /// Thread with its comments and their replies
    async fn get_thread(&self, thread_id: &str) -> Result<ThreadDetail, AppError>;
}

/// ThreadService implementation
pub struct ThreadServiceImpl {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
}

impl ThreadServiceImpl {
    /// Create a new ThreadServiceImpl
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
impl ThreadService for ThreadServiceImpl {
    async fn add_thread(&self, payload: &Value) -> Result<AddedThread, AppError> {
        let thread = AddThread::new(payload)?;

        self.thread_repo.add_thread(&thread).await
    }

    async fn get_thread(&self, thread_id: &str) -> Result<ThreadDetail, AppError> {
        self.thread_repo.check_availability_thread(thread_id).await?;

        let (thread, comments, replies) = futures::try_join!(
            self.thread_repo.get_thread(thread_id),
            self.comment_repo.get_comments(thread_id),
            self.reply_repo.get_replies(thread_id),
        )?;

        Ok(assemble(&thread, &comments, &replies)?)
    }
}
