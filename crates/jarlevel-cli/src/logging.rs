//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never interleave with the progress line on
//! stdout. `RUST_LOG` takes precedence over `--verbose`.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
