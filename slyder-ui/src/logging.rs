//! Tracing subscriber setup for hosts and demos.
//!
//! ## Usage
//!
//! Call [`init_tracing`] once near the start of `main`. The `RUST_LOG`
//! environment variable overrides the default filter.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "error,slyder_ui=info,slyder_components=info";

/// Installs a pretty `fmt` subscriber filtered by `RUST_LOG`.
///
/// Installing twice is harmless: the second call leaves the first subscriber
/// in place.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_FILTER);
}

/// Like [`init_tracing`], with a caller-provided fallback filter.
pub fn init_tracing_with(fallback: &str) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new(fallback) {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("error"),
        },
    };

    let installed = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init()
        .is_ok();
    if installed {
        debug!("tracing subscriber installed");
    }
}
