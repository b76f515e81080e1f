//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Builds the env filter from `log_level` (`RUST_LOG` syntax), falling back to `info`.
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber.
///
/// `log_format` is `json` for one JSON object per line, anything else for
/// human-readable text.
pub fn init(log_level: &str, log_format: &str) {
    let registry = tracing_subscriber::registry().with(env_filter(log_level));

    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }
}
