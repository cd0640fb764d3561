//! Security Implementations
//!
//! Argon2 password hashing and HS256 JWT token management.

mod argon2_password_hash;
mod jwt_token_manager;

pub use argon2_password_hash::Argon2PasswordHash;
pub use jwt_token_manager::JwtTokenManager;
