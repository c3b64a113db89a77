//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing-subscriber`, so they never mix
//! with the rendered demo on stdout.

use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Environment variable holding a `tracing` filter, e.g. `hello=debug`.
/// Overrides the `-v` count when set.
pub const LOG_ENV: &str = "HELLO_LOG";

/// Builds the filter: `HELLO_LOG` when it parses, else `level`.
#[must_use]
pub fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(level: LogLevel) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_ok() {
        tracing::debug!(level = level.as_directive(), "logging initialized");
    }
}
