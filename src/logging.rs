//! Logging setup
//!
//! `RUST_LOG` decides the level when it is set and parses; otherwise only
//! warnings and errors are shown.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "warn";

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVES`]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global fmt subscriber, writing to stderr
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
