//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database repositories (PostgreSQL)
//! - In-memory repositories for local runs and tests
//! - Password hashing and token signing

pub mod database;
pub mod errors;
pub mod memory;
pub mod repositories;
pub mod security;
