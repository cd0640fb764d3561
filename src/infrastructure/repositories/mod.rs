//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! This module provides concrete implementations of the repository traits
//! defined in the domain layer. Each repository handles data access for
//! a specific entity type.
//!
//! ## Available Repositories
//!
//! - **UserRepository** - User registration and credential lookups
//! - **AuthenticationRepository** - Refresh token store
//! - **ThreadRepository** - Threads joined with their owner
//! - **CommentRepository** - Soft-deletable comments
//! - **ReplyRepository** - Soft-deletable replies to comments
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgThreadRepository, PgUserRepository};
//! use crate::shared::id::UuidGenerator;
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let ids = Arc::new(UuidGenerator);
//!     let user_repo = PgUserRepository::new(pool.clone(), ids.clone());
//!     let thread_repo = PgThreadRepository::new(pool.clone(), ids);
//! }
//! ```

pub mod authentication_repository;
pub mod comment_repository;
pub mod reply_repository;
pub mod thread_repository;
pub mod user_repository;

pub use authentication_repository::PgAuthenticationRepository;
pub use comment_repository::PgCommentRepository;
pub use reply_repository::PgReplyRepository;
pub use thread_repository::PgThreadRepository;
pub use user_repository::PgUserRepository;
