//! Diagnostic logging setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug` and the
/// configured `level` is used. An unknown level falls back to `warn`.
pub fn init(level: &str, verbose: bool) {
    let directive = if verbose { "debug" } else { level };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
