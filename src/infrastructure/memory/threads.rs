use async_trait::async_trait;
use chrono::Utc;

use super::{MemoryStore, ThreadRecord};
use crate::domain::{AddThread, AddedThread, ThreadRepository, ThreadRow};
use crate::infrastructure::errors;
use crate::shared::error::AppError;

#[async_trait]
impl ThreadRepository for MemoryStore {
    async fn add_thread(&self, thread: &AddThread) -> Result<AddedThread, AppError> {
        let mut tables = self.tables.write();

        // Mirrors the foreign key on threads.owner.
        if tables.username_of(&thread.owner).is_none() {
            return Err(AppError::Internal(format!(
                "thread owner {} does not exist",
                thread.owner
            )));
        }

        let record = ThreadRecord {
            id: self.ids.prefixed("thread"),
            title: thread.title.clone(),
            body: thread.body.clone(),
            owner: thread.owner.clone(),
            date: Utc::now(),
        };
        let added = AddedThread {
            id: record.id.clone(),
            title: record.title.clone(),
            owner: record.owner.clone(),
        };
        tables.threads.push(record);

        Ok(added)
    }

    async fn check_availability_thread(&self, thread_id: &str) -> Result<(), AppError> {
        if !self.tables.read().threads.iter().any(|t| t.id == thread_id) {
            return Err(errors::thread_not_found());
        }

        Ok(())
    }

    async fn get_thread(&self, thread_id: &str) -> Result<ThreadRow, AppError> {
        let tables = self.tables.read();

        tables
            .threads
            .iter()
            .find(|t| t.id == thread_id)
            .and_then(|t| {
                tables.username_of(&t.owner).map(|username| ThreadRow {
                    id: t.id.clone(),
                    title: t.title.clone(),
                    body: t.body.clone(),
                    date: t.date,
                    username: username.to_owned(),
                })
            })
            .ok_or_else(errors::thread_not_found)
    }
}
