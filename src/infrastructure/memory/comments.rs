use async_trait::async_trait;
use chrono::Utc;

use super::{CommentRecord, MemoryStore};
use crate::domain::{AddComment, AddedComment, CommentRepository, CommentRow};
use crate::infrastructure::errors;
use crate::shared::error::AppError;

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn add_comment(&self, comment: &AddComment) -> Result<AddedComment, AppError> {
        let mut tables = self.tables.write();

        if !tables.threads.iter().any(|t| t.id == comment.thread_id) {
            return Err(AppError::Internal(format!(
                "comment thread {} does not exist",
                comment.thread_id
            )));
        }

        let record = CommentRecord {
            id: self.ids.prefixed("comment"),
            content: comment.content.clone(),
            owner: comment.owner.clone(),
            thread_id: comment.thread_id.clone(),
            date: Utc::now(),
            deleted_at: None,
        };
        let added = AddedComment {
            id: record.id.clone(),
            content: record.content.clone(),
            owner: record.owner.clone(),
        };
        tables.comments.push(record);

        Ok(added)
    }

    async fn check_availability_comment(&self, comment_id: &str) -> Result<(), AppError> {
        if !self.tables.read().comments.iter().any(|c| c.id == comment_id) {
            return Err(errors::comment_not_found());
        }

        Ok(())
    }

    async fn verify_comment_owner(&self, comment_id: &str, owner: &str) -> Result<(), AppError> {
        let owned = self
            .tables
            .read()
            .comments
            .iter()
            .any(|c| c.id == comment_id && c.owner == owner);

        if !owned {
            return Err(errors::not_comment_owner());
        }

        Ok(())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError> {
        let now = Utc::now();
        let mut tables = self.tables.write();

        if let Some(comment) = tables.comments.iter_mut().find(|c| c.id == comment_id) {
            comment.deleted_at = Some(now);
        }

        Ok(())
    }

    async fn get_comments(&self, thread_id: &str) -> Result<Vec<CommentRow>, AppError> {
        let tables = self.tables.read();

        let mut rows: Vec<CommentRow> = tables
            .comments
            .iter()
            .filter(|c| c.thread_id == thread_id)
            .filter_map(|c| {
                tables.username_of(&c.owner).map(|username| CommentRow {
                    id: c.id.clone(),
                    username: username.to_owned(),
                    date: c.date,
                    content: c.content.clone(),
                    deleted_at: c.deleted_at,
                })
            })
            .collect();
        rows.sort_by_key(|row| row.date);

        Ok(rows)
    }
}
