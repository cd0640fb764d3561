//! Application Services
//!
//! Use cases that coordinate entity validation and repository calls.
//!
//! ## Available Services
//!
//! - **UserService**: Registration
//! - **AuthService**: Login, access token refresh, logout
//! - **ThreadService**: Thread creation and the nested thread view
//! - **CommentService**: Adding and deleting comments
//! - **ReplyService**: Adding and deleting replies

pub mod auth_service;
pub mod comment_service;
pub mod reply_service;
pub mod thread_service;
pub mod user_service;

pub use auth_service::{AuthService, AuthServiceImpl};
pub use comment_service::{CommentService, CommentServiceImpl};
pub use reply_service::{ReplyService, ReplyServiceImpl};
pub use thread_service::{ThreadService, ThreadServiceImpl};
pub use user_service::{UserService, UserServiceImpl};
