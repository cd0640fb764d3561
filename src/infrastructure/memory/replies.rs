use async_trait::async_trait;
use chrono::Utc;

use super::{MemoryStore, ReplyRecord};
use crate::domain::{AddReply, AddedReply, ReplyRepository, ReplyRow};
use crate::infrastructure::errors;
use crate::shared::error::AppError;

#[async_trait]
impl ReplyRepository for MemoryStore {
    async fn add_reply(&self, reply: &AddReply) -> Result<AddedReply, AppError> {
        let mut tables = self.tables.write();

        if !tables.comments.iter().any(|c| c.id == reply.comment_id) {
            return Err(AppError::Internal(format!(
                "reply comment {} does not exist",
                reply.comment_id
            )));
        }

        let record = ReplyRecord {
            id: self.ids.prefixed("reply"),
            content: reply.content.clone(),
            owner: reply.owner.clone(),
            thread_id: reply.thread_id.clone(),
            comment_id: reply.comment_id.clone(),
            date: Utc::now(),
            deleted_at: None,
        };
        let added = AddedReply {
            id: record.id.clone(),
            content: record.content.clone(),
            owner: record.owner.clone(),
        };
        tables.replies.push(record);

        Ok(added)
    }

    async fn check_availability_reply(&self, reply_id: &str) -> Result<(), AppError> {
        if !self.tables.read().replies.iter().any(|r| r.id == reply_id) {
            return Err(errors::reply_not_found());
        }

        Ok(())
    }

    async fn verify_reply_owner(&self, reply_id: &str, owner: &str) -> Result<(), AppError> {
        let owned = self
            .tables
            .read()
            .replies
            .iter()
            .any(|r| r.id == reply_id && r.owner == owner);

        if !owned {
            return Err(errors::not_reply_owner());
        }

        Ok(())
    }

    async fn delete_reply(&self, reply_id: &str) -> Result<(), AppError> {
        let now = Utc::now();
        let mut tables = self.tables.write();

        if let Some(reply) = tables.replies.iter_mut().find(|r| r.id == reply_id) {
            reply.deleted_at = Some(now);
        }

        Ok(())
    }

    async fn get_replies(&self, thread_id: &str) -> Result<Vec<ReplyRow>, AppError> {
        let tables = self.tables.read();

        let mut rows: Vec<ReplyRow> = tables
            .replies
            .iter()
            .filter(|r| r.thread_id == thread_id)
            .filter_map(|r| {
                tables.username_of(&r.owner).map(|username| ReplyRow {
                    id: r.id.clone(),
                    comment_id: r.comment_id.clone(),
                    username: username.to_owned(),
                    date: r.date,
                    content: r.content.clone(),
                    deleted_at: r.deleted_at,
                })
            })
            .collect();
        rows.sort_by_key(|row| row.date);

        Ok(rows)
    }
}
