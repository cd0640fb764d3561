//! Data Transfer Objects
//!
//! DTOs for API response serialization.

pub mod response;

pub use response::{
    AccessTokenResponse, AddedCommentResponse, AddedReplyResponse, AddedThreadResponse,
    AddedUserResponse, ApiResponse, ErrorResponse, LoginResponse, ThreadResponse,
};
