//! # Structured Logging
//!
//! Installs the global `tracing` subscriber. Filtering follows `RUST_LOG`
//! and defaults to `info`.

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global subscriber. Call once, at process start.
pub fn init(format: LogFormat) {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
