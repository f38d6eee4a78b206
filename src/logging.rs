//! Diagnostics logging setup
//!
//! Logs go to stderr through `tracing-subscriber`, filtered by `TREEP_LOG`
//! (for example `TREEP_LOG=debug` or `TREEP_LOG=treep::tree=trace`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TREEP_LOG";

const DEFAULT_FILTER: &str = "error";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
}
