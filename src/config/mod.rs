//! # Configuration Module
//!
//! Settings for the HTTP server, the storage backend and token signing.
//! Sources, lowest priority first:
//! - built-in defaults
//! - `config/default.toml`, then `config/{RUN_ENV}.toml`
//! - `APP__SECTION__KEY` environment variables
//! - plain variables such as `PORT`, `DATABASE_URL`, `ACCESS_TOKEN_KEY`
//!
//! A `.env` file is read first via dotenvy.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_api::config::{Settings, StorageBackend};
//!
//! let settings = Settings::load()?;
//! if settings.storage.backend == StorageBackend::Memory {
//!     println!("serving from memory on {}", settings.server_addr());
//! }
//! ```

mod settings;

pub use settings::*;
