//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never interleave with menu output on stdout.

use tracing_subscriber::EnvFilter;

/// Initialize logging for the process.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects `debug` and
/// the configured level applies. Safe to call more than once.
pub fn init(configured_level: &str, verbose: bool) {
    let fallback = if verbose { "debug" } else { configured_level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
