//! Logging initialization.
//!
//! Logs go to stderr so stdout stays clean for command output.

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter from `RUST_LOG`, falling back to `default_level`.
fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the global subscriber. `json` switches to structured output.
pub fn init(default_level: &str, json: bool) {
    let registry = tracing_subscriber::registry().with(filter(default_level));

    if json {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
            .init();
    }
}
