//! Tracing subscriber setup.

use crate::config::LogFormat;
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info";

/// Install the global subscriber.
///
/// Respects `RUST_LOG` when set and falls back to `info,tower_http=info`.
/// Writes to stdout. Calling it again after a subscriber is installed is a
/// no-op, which keeps tests that share a process happy.
pub fn init(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
