use async_trait::async_trait;

use super::{MemoryStore, UserRecord};
use crate::domain::{RegisterUser, RegisteredUser, UserRepository};
use crate::infrastructure::errors;
use crate::shared::error::AppError;

#[async_trait]
impl UserRepository for MemoryStore {
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser, AppError> {
        let mut tables = self.tables.write();

        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(errors::username_taken());
        }

        let record = UserRecord {
            id: self.ids.prefixed("user"),
            username: user.username.clone(),
            password: user.password.clone(),
            fullname: user.fullname.clone(),
        };
        let registered = RegisteredUser {
            id: record.id.clone(),
            username: record.username.clone(),
            fullname: record.fullname.clone(),
        };
        tables.users.push(record);

        Ok(registered)
    }

    async fn verify_available_username(&self, username: &str) -> Result<(), AppError> {
        if self.tables.read().users.iter().any(|u| u.username == username) {
            return Err(errors::username_taken());
        }

        Ok(())
    }

    async fn get_password_by_username(&self, username: &str) -> Result<String, AppError> {
        self.tables
            .read()
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.password.clone())
            .ok_or_else(errors::username_not_found)
    }

    async fn get_id_by_username(&self, username: &str) -> Result<String, AppError> {
        self.tables
            .read()
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.id.clone())
            .ok_or_else(errors::user_not_found)
    }
}
