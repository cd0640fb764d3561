//! Comment entities and repository trait.
//!
//! Maps to the `comments` table. Comments are soft-deleted through the
//! nullable `deleted_at` column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use super::entry::{read_entries, EntryRules, EntryView};
use crate::domain::errors::InvariantError;
use crate::domain::payload::Payload;
use crate::shared::error::AppError;
use crate::shared::time::to_iso_string;

/// Content shown in place of a deleted comment.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// A new comment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddComment {
    pub owner: String,
    pub thread_id: String,
    pub content: String,
}

impl AddComment {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [owner, thread_id, content] = Payload::new(payload).strings(
            ["owner", "thread_id", "content"],
            InvariantError::AddCommentMissingProperty,
            InvariantError::AddCommentInvalidType,
        )?;

        Ok(Self {
            owner,
            thread_id,
            content,
        })
    }
}

/// A comment as returned after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [id, content, owner] = Payload::new(payload).strings(
            ["id", "content", "owner"],
            InvariantError::AddedCommentMissingProperty,
            InvariantError::AddedCommentInvalidType,
        )?;

        Ok(Self { id, content, owner })
    }
}

/// Read-side view of a thread's comments with deleted content masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetComments {
    pub comments: Vec<EntryView>,
}

impl GetComments {
    /// Expects `{ "comments": [ { id, username, date, content, deleted_at }, .. ] }`.
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let comments = read_entries(
            payload,
            EntryRules {
                collection: "comments",
                placeholder: DELETED_COMMENT_CONTENT,
                missing: InvariantError::GetCommentsMissingProperty,
                mistyped: InvariantError::GetCommentsInvalidType,
            },
        )?;

        Ok(Self { comments })
    }
}

/// Payload of a delete comment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    pub thread_id: String,
    pub comment_id: String,
    pub owner: String,
}

impl DeleteComment {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [thread_id, comment_id, owner] = Payload::new(payload).strings(
            ["thread_id", "comment_id", "owner"],
            InvariantError::DeleteCommentMissingPayload,
            InvariantError::DeleteCommentInvalidType,
        )?;

        Ok(Self {
            thread_id,
            comment_id,
            owner,
        })
    }
}

/// Comment as fetched from the store, joined with the owner's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRow {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CommentRow {
    /// Raw payload form with timestamps rendered as ISO strings.
    pub fn to_payload(&self) -> Value {
        json!({
            "id": self.id,
            "username": self.username,
            "date": to_iso_string(&self.date),
            "content": self.content,
            "deleted_at": self.deleted_at.as_ref().map(to_iso_string),
        })
    }
}

/// Repository trait for Comment data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, comment: &AddComment) -> Result<AddedComment, AppError>;

    /// Fail with [`AppError::NotFound`] if the comment does not exist.
    async fn check_availability_comment(&self, comment_id: &str) -> Result<(), AppError>;

    /// Fail with [`AppError::Forbidden`] unless `owner` wrote the comment.
    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<(), AppError>;

    /// Soft delete: stamps `deleted_at`.
    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError>;

    /// All comments of a thread, oldest first, deleted ones included.
    async fn get_comments(&self, thread_id: &str) -> Result<Vec<CommentRow>, AppError>;
}
