//! HTTP Layer

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use routes::create_router;
