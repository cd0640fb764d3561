//! # Domain Entities
//!
//! Validated value objects for the forum and the repository traits that
//! persist them. Every constructor takes a raw JSON payload and either returns
//! the entity or the [`InvariantError`](crate::domain::InvariantError) it broke.
//!
//! ## Entities
//!
//! - **User**: registration, registered user and login credentials
//! - **Authentication**: issued token pairs and refresh/logout payloads
//! - **Thread**: new thread, created thread and the read-side header
//! - **Comment**: new comment, created comment, read-side list and delete payload
//! - **Reply**: same as comments, scoped to one comment
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod authentication;
mod comment;
mod entry;
mod reply;
mod thread;
mod user;

pub use authentication::{
    AuthenticationRepository, DeleteAuthentication, NewAuth, RefreshAuthentication,
};
pub use comment::{
    AddComment, AddedComment, CommentRepository, CommentRow, DeleteComment, GetComments,
    DELETED_COMMENT_CONTENT,
};
pub use entry::EntryView;
pub use reply::{
    AddReply, AddedReply, DeleteReply, GetReplies, ReplyRepository, ReplyRow,
    DELETED_REPLY_CONTENT,
};
pub use thread::{AddThread, AddedThread, GetThread, ThreadRepository, ThreadRow, TITLE_MAX_CHARS};
pub use user::{RegisterUser, RegisteredUser, UserLogin, UserRepository, USERNAME_MAX_CHARS};

#[cfg(test)]
pub use authentication::MockAuthenticationRepository;
#[cfg(test)]
pub use comment::MockCommentRepository;
#[cfg(test)]
pub use reply::MockReplyRepository;
#[cfg(test)]
pub use thread::MockThreadRepository;
#[cfg(test)]
pub use user::MockUserRepository;
