//! Tracing setup shared by both demo binaries.
//!
//! Logs go to stderr so stdout only ever carries the demo's result line.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LoggingConfig, DEFAULT_LOG_FILTER};

/// Pick the log filter with priority: CLI > env > default.
pub fn resolve_filter(cli: Option<String>) -> String {
    pick_filter(cli, std::env::var("RUST_LOG").ok())
}

fn pick_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(filter: &str, config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    let result = if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
