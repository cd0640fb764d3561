//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// Which store backs the repositories
    pub storage: StorageSettings,

    /// Token signing settings
    pub tokens: TokenSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,
}

/// Repository backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,
}

/// Access and refresh token configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenSettings {
    /// HS256 key for access tokens
    pub access_token_key: String,

    /// HS256 key for refresh tokens
    pub refresh_token_key: String,

    /// Access token lifetime in seconds
    pub access_token_age: i64,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

/// Minimum required length for token keys (256 bits = 32 bytes)
pub const MIN_TOKEN_KEY_LENGTH: usize = 32;

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if a token key is too short.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.host", "localhost")?
            .set_default("server.port", 5000)?
            .set_default("database.url", "postgres://localhost/forumapi")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("storage.backend", "postgres")?
            .set_default("tokens.access_token_key", "")?
            .set_default("tokens.refresh_token_key", "")?
            .set_default("tokens.access_token_age", 3000)?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__SERVER__PORT=5000 -> server.port = 5000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.host", std::env::var("HOST").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option(
                "tokens.access_token_key",
                std::env::var("ACCESS_TOKEN_KEY").ok(),
            )?
            .set_override_option(
                "tokens.refresh_token_key",
                std::env::var("REFRESH_TOKEN_KEY").ok(),
            )?
            .set_override_option(
                "tokens.access_token_age",
                std::env::var("ACCESS_TOKEN_AGE").ok(),
            )?
            .set_override_option("storage.backend", std::env::var("STORAGE_BACKEND").ok())?
            .build()?
            .try_deserialize()
            .and_then(Self::validate)
    }

    /// Reject token keys too short to sign with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        for (name, key) in [
            ("access", &self.tokens.access_token_key),
            ("refresh", &self.tokens.refresh_token_key),
        ] {
            if key.len() < MIN_TOKEN_KEY_LENGTH {
                return Err(ConfigError::Message(format!(
                    "{} token key must be at least {} characters for security. Current length: {}",
                    name,
                    MIN_TOKEN_KEY_LENGTH,
                    key.len()
                )));
            }
        }

        if self.tokens.access_token_age <= 0 {
            return Err(ConfigError::Message(
                "access token age must be a positive number of seconds".into(),
            ));
        }

        Ok(self)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseSettings {
    /// Get the connection URL.
    pub fn connection_url(&self) -> &str {
        &self.url
    }
}
