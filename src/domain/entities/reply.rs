//! Reply entities and repository trait.
//!
//! Maps to the `replies` table. A reply belongs to one comment of one thread
//! and is soft-deleted like comments.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use super::entry::{read_entries, EntryRules, EntryView};
use crate::domain::errors::InvariantError;
use crate::domain::payload::Payload;
use crate::shared::error::AppError;
use crate::shared::time::to_iso_string;

/// Content shown in place of a deleted reply.
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

/// A new reply request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReply {
    pub thread_id: String,
    pub comment_id: String,
    pub content: String,
    pub owner: String,
}

impl AddReply {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [thread_id, comment_id, content, owner] = Payload::new(payload).strings(
            ["thread_id", "comment_id", "content", "owner"],
            InvariantError::AddReplyMissingProperty,
            InvariantError::AddReplyInvalidType,
        )?;

        Ok(Self {
            thread_id,
            comment_id,
            content,
            owner,
        })
    }
}

/// A reply as returned after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedReply {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [id, content, owner] = Payload::new(payload).strings(
            ["id", "content", "owner"],
            InvariantError::AddedReplyMissingProperty,
            InvariantError::AddedReplyInvalidType,
        )?;

        Ok(Self { id, content, owner })
    }
}

/// Read-side view of a thread's replies with deleted content masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetReplies {
    pub replies: Vec<EntryView>,
}

impl GetReplies {
    /// Expects `{ "replies": [ { id, username, date, content, deleted_at, .. }, .. ] }`.
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let replies = read_entries(
            payload,
            EntryRules {
                collection: "replies",
                placeholder: DELETED_REPLY_CONTENT,
                missing: InvariantError::GetRepliesMissingProperty,
                mistyped: InvariantError::GetRepliesInvalidType,
            },
        )?;

        Ok(Self { replies })
    }
}

/// Payload of a delete reply request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReply {
    pub thread_id: String,
    pub comment_id: String,
    pub reply_id: String,
    pub owner: String,
}

impl DeleteReply {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [thread_id, comment_id, reply_id, owner] = Payload::new(payload).strings(
            ["thread_id", "comment_id", "reply_id", "owner"],
            InvariantError::DeleteReplyMissingPayload,
            InvariantError::DeleteReplyInvalidType,
        )?;

        Ok(Self {
            thread_id,
            comment_id,
            reply_id,
            owner,
        })
    }
}

/// Reply as fetched from the store, joined with the owner's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRow {
    pub id: String,
    pub comment_id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ReplyRow {
    /// Raw payload form with timestamps rendered as ISO strings.
    pub fn to_payload(&self) -> Value {
        json!({
            "id": self.id,
            "comment_id": self.comment_id,
            "username": self.username,
            "date": to_iso_string(&self.date),
            "content": self.content,
            "deleted_at": self.deleted_at.as_ref().map(to_iso_string),
        })
    }
}

/// Repository trait for Reply data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, reply: &AddReply) -> Result<AddedReply, AppError>;

    /// Fail with [`AppError::NotFound`] if the reply does not exist.
    async fn check_availability_reply(&self, reply_id: &str) -> Result<(), AppError>;

    /// Fail with [`AppError::Forbidden`] unless `owner` wrote the reply.
    async fn verify_reply_owner(&self, reply_id: &str, owner: &str) -> Result<(), AppError>;

    /// Soft delete: stamps `deleted_at`.
    async fn delete_reply(&self, reply_id: &str) -> Result<(), AppError>;

    /// All replies of a thread across its comments, oldest first.
    async fn get_replies(&self, thread_id: &str) -> Result<Vec<ReplyRow>, AppError>;
}
