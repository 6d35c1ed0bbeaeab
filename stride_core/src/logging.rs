//! Tracing setup for the `stride` binary and the core's unit tests.
//!
//! Diagnostics go to stderr so workout summaries on stdout stay clean.
//! Skipped packages are logged at `info`, below the binary's default
//! `warn` level, because the binary reports them itself.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging at `warn`, the level the `stride` binary runs at
///
/// Set RUST_LOG (e.g. `RUST_LOG=stride_core=debug`) to see dispatch and
/// per-summary details.
pub fn init() {
    init_with_level("warn")
}

/// Initialize logging with a specific default level
///
/// # Arguments
/// * `default_level` - Default log level (debug, info, warn, error)
///
/// This can still be overridden by RUST_LOG environment variable.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
