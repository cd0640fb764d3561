//! # Forum API Library
//!
//! Backend for a discussion forum: users register and log in, post threads,
//! comment on threads and reply to comments. Provides:
//! - RESTful HTTP API endpoints with JWT bearer authentication
//! - PostgreSQL storage, or an in-memory store for tests and local runs
//! - Thread detail aggregation with soft-deleted content masking
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Validated entities and repository traits
//! - **Application Layer**: Use case services, thread aggregation and DTOs
//! - **Infrastructure Layer**: Storage backends, password hashing and tokens
//! - **Presentation Layer**: HTTP handlers, extractors and middleware
//!
//! ## Module Structure
//!
//! ```text
//! forum_api/
//! +-- config/         Configuration management
//! +-- domain/         Entities, payload validation and repository traits
//! +-- application/    Use cases, aggregation and response DTOs
//! +-- infrastructure/ PostgreSQL, in-memory store and security
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Errors, id generation and time formatting
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
