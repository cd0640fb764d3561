//! # Domain Layer
//!
//! The domain layer contains the core business rules of the forum.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Validated entities and repository traits (User, Thread, Comment, Reply, ...)
//! - **errors**: Invariant violations raised by entity constructors
//! - **payload**: Presence and type checks over raw JSON payloads
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Entities are pure: the same payload always yields the same result
//! - Repository traits define data access contracts

pub mod entities;
pub mod errors;
pub mod payload;

// Re-export commonly used types
pub use entities::*;
pub use errors::InvariantError;
