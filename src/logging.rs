//! Tracing/logging initialization
//!
//! Log lines go to stderr so stdout carries nothing but the menu dialogue.
//! The filter comes from `RUST_LOG`, falling back to `warn`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing for the process
///
/// Calling it again after a subscriber is installed does nothing.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
