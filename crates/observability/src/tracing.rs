//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Logs go to stderr so report output on stdout stays clean; level is
/// configurable via `RUST_LOG`. Safe to call multiple times (subsequent
/// calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
