//! Thread entities and repository trait.
//!
//! Maps to the `threads` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::errors::InvariantError;
use crate::domain::payload::Payload;
use crate::shared::error::AppError;
use crate::shared::time::{normalize_iso_string, to_iso_string};

/// Maximum thread title length, in characters.
pub const TITLE_MAX_CHARS: usize = 50;

/// A new thread request. `owner` is the authenticated user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl AddThread {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [title, body, owner] = Payload::new(payload).strings(
            ["title", "body", "owner"],
            InvariantError::AddThreadMissingProperty,
            InvariantError::AddThreadInvalidType,
        )?;

        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(InvariantError::AddThreadTitleTooLong);
        }

        Ok(Self { title, body, owner })
    }
}

/// A thread as returned after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [id, title, owner] = Payload::new(payload).strings(
            ["id", "title", "owner"],
            InvariantError::AddedThreadMissingProperty,
            InvariantError::AddedThreadInvalidType,
        )?;

        Ok(Self { id, title, owner })
    }
}

/// Read-side view of a thread header.
///
/// `date` must be an RFC 3339 timestamp; it is re-rendered in UTC with
/// millisecond precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
}

impl GetThread {
    pub fn new(payload: &Value) -> Result<Self, InvariantError> {
        let [id, title, body, date, username] = Payload::new(payload).strings(
            ["id", "title", "body", "date", "username"],
            InvariantError::GetThreadMissingProperty,
            InvariantError::GetThreadInvalidType,
        )?;

        let date = normalize_iso_string(&date).ok_or(InvariantError::GetThreadInvalidType)?;

        Ok(Self {
            id,
            title,
            body,
            date,
            username,
        })
    }
}

/// Thread header as fetched from the store, joined with the owner's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRow {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

impl ThreadRow {
    /// Raw payload form with the date rendered as an ISO string.
    pub fn to_payload(&self) -> Value {
        json!({
            "id": self.id,
            "title": self.title,
            "body": self.body,
            "date": to_iso_string(&self.date),
            "username": self.username,
        })
    }
}

/// Repository trait for Thread data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, thread: &AddThread) -> Result<AddedThread, AppError>;

    /// Fail with [`AppError::NotFound`] if the thread does not exist.
    async fn check_availability_thread(&self, thread_id: &str) -> Result<(), AppError>;

    async fn get_thread(&self, thread_id: &str) -> Result<ThreadRow, AppError>;
}
