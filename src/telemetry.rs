//! Telemetry and Observability
//!
//! Structured logging setup. Human-readable output during development,
//! JSON lines when `RUN_ENV=production`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,forum_api=debug,sqlx=warn,tower_http=debug";

/// Initialize tracing subscriber
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let production = std::env::var("RUN_ENV").is_ok_and(|env| env == "production");

    let registry = tracing_subscriber::registry().with(env_filter);

    if production {
        registry
            .with(fmt::layer().json().with_current_span(true).with_target(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    }

    tracing::info!(production, "Tracing initialized");
}
