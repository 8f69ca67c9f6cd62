//! Tracing subscriber setup for hosts and tools.

use tracing_subscriber::EnvFilter;

/// Default directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Fails if a global subscriber is already installed.
pub fn try_init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
}

/// Like [`try_init`], ignoring an already installed subscriber.
pub fn init() {
    let _ = try_init();
}
