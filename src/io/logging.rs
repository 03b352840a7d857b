//! Tracing subscriber setup for the command-line binary

use crate::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Build the log filter from `RUST_LOG`, falling back to the default level
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to stderr
///
/// Later calls are ignored, so tests and embedders may call this freely.
pub fn init() {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime());

    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init();
}
