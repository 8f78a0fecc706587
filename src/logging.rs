//! `tracing-subscriber` setup shared by both binaries.
//!
//! Output always goes to stderr; the RPC binary reserves stdout for protocol lines.

use tracing_subscriber::EnvFilter;

use crate::types::settings::LoggingSettings;

/// Set to `json` to force structured log lines.
pub const LOG_FORMAT_ENV: &str = "SECUREGEN_LOG_FORMAT";

/// Filter directive: `RUST_LOG` when set, else the configured level.
pub fn filter_directive(settings: &LoggingSettings) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| settings.level.clone())
}

pub fn wants_json(settings: &LoggingSettings) -> bool {
    settings.json
        || std::env::var(LOG_FORMAT_ENV)
            .map(|v| v == "json")
            .unwrap_or(false)
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init(settings: &LoggingSettings) {
    let env_filter = EnvFilter::try_new(filter_directive(settings))
        .unwrap_or_else(|_| EnvFilter::new("securegen=info"));

    let result = if wants_json(settings) {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}
