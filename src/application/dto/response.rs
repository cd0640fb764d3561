//! Response DTOs
//!
//! Data structures for API response bodies. Successful responses are wrapped
//! in `{ "status": "success", "data": ... }`; failures carry a message.

use serde::Serialize;

use crate::application::aggregation::ThreadDetail;
use crate::domain::{AddedComment, AddedReply, AddedThread, NewAuth, RegisteredUser};

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope without a `data` field
    pub fn empty() -> Self {
        Self {
            status: "success",
            data: None,
        }
    }
}

/// Registration response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedUserResponse {
    pub added_user: RegisteredUser,
}

/// Login response carries the issued [`NewAuth`] pair directly.
pub type LoginResponse = NewAuth;

/// Refresh response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Thread creation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadResponse {
    pub added_thread: AddedThread,
}

/// Thread detail response
#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    pub thread: ThreadDetail,
}

/// Comment creation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentResponse {
    pub added_comment: AddedComment,
}

/// Reply creation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReplyResponse {
    pub added_reply: AddedReply,
}

/// Error response: `status` is `"fail"` for client errors and `"error"` for server errors
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}
