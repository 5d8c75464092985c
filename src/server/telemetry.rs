//! Tracing subscriber setup

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Whether log lines should be JSON
///
/// JSON unless `RUST_LOG_FORMAT` is set to something other than `json`.
pub fn use_json_format(value: Option<&str>) -> bool {
    value.map(|v| v == "json").unwrap_or(true)
}

/// Install the global subscriber
///
/// Filtering follows `RUST_LOG` with `info` as the floor.
pub fn init_tracing() {
    let format = std::env::var("RUST_LOG_FORMAT").ok();
    let filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());

    if use_json_format(format.as_deref()) {
        tracing_subscriber::registry()
            .with(fmt::layer().json().flatten_event(true).with_current_span(true))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}
