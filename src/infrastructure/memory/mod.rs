//! In-Memory Store
//!
//! Process-local implementation of every repository trait. Rows are kept in
//! insertion order behind one lock so joins see a consistent snapshot.
//! Behaves like the PostgreSQL repositories: usernames come from an inner
//! join on the owner, lists are ordered by date, deletes are soft.

mod authentications;
mod comments;
mod replies;
mod threads;
mod users;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::shared::id::{IdGenerator, UuidGenerator};

#[derive(Debug, Clone)]
struct UserRecord {
    id: String,
    username: String,
    password: String,
    fullname: String,
}

#[derive(Debug, Clone)]
struct ThreadRecord {
    id: String,
    title: String,
    body: String,
    owner: String,
    date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct CommentRecord {
    id: String,
    content: String,
    owner: String,
    thread_id: String,
    date: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
struct ReplyRecord {
    id: String,
    content: String,
    owner: String,
    thread_id: String,
    comment_id: String,
    date: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserRecord>,
    tokens: Vec<String>,
    threads: Vec<ThreadRecord>,
    comments: Vec<CommentRecord>,
    replies: Vec<ReplyRecord>,
}

impl Tables {
    fn username_of(&self, user_id: &str) -> Option<&str> {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.username.as_str())
    }
}

/// Shared in-memory store implementing all repository traits.
pub struct MemoryStore {
    tables: RwLock<Tables>,
    ids: Arc<dyn IdGenerator>,
}

impl MemoryStore {
    /// Create an empty store that draws ids from `ids`.
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            ids,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Arc::new(UuidGenerator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::domain::{
        AddComment, AddReply, AddThread, CommentRepository, RegisterUser, ReplyRepository,
        ThreadRepository, UserRepository,
    };

    /// Deterministic ids: `<prefix>-1`, `<prefix>-2`, ...
    #[derive(Default)]
    pub(super) struct SequentialIds(AtomicUsize);

    impl IdGenerator for SequentialIds {
        fn generate(&self) -> String {
            (self.0.fetch_add(1, Ordering::SeqCst) + 1).to_string()
        }
    }

    pub(super) fn store() -> MemoryStore {
        MemoryStore::new(Arc::new(SequentialIds::default()))
    }

    pub(super) async fn register(store: &MemoryStore, username: &str) -> String {
        store
            .add_user(&RegisterUser {
                username: username.into(),
                password: "hashed".into(),
                fullname: "Full Name".into(),
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_thread_tree_round_trip() {
        let store = store();
        let author = register(&store, "dicoding").await;
        let replier = register(&store, "johndoe").await;

        let thread = store
            .add_thread(&AddThread {
                title: "sebuah thread".into(),
                body: "sebuah body thread".into(),
                owner: author.clone(),
            })
            .await
            .unwrap();
        let comment = store
            .add_comment(&AddComment {
                owner: author,
                thread_id: thread.id.clone(),
                content: "sebuah comment".into(),
            })
            .await
            .unwrap();
        store
            .add_reply(&AddReply {
                thread_id: thread.id.clone(),
                comment_id: comment.id.clone(),
                content: "sebuah balasan".into(),
                owner: replier,
            })
            .await
            .unwrap();

        let thread_row = store.get_thread(&thread.id).await.unwrap();
        let comments = store.get_comments(&thread.id).await.unwrap();
        let replies = store.get_replies(&thread.id).await.unwrap();

        assert_eq!(thread_row.username, "dicoding");
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].username, "dicoding");
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].username, "johndoe");
        assert_eq!(replies[0].comment_id, comment.id);
    }
}
