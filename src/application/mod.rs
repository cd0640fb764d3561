//! Application Layer
//!
//! Contains the use case services, the thread aggregation and the response
//! DTOs. This layer orchestrates the flow of data between the presentation
//! and domain layers.

pub mod aggregation;
pub mod dto;
pub mod security;
pub mod services;
