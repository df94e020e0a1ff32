//! Logging setup for the command-line binary.
//!
//! Logs go to stderr so that JSON written to stdout stays parseable.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Resolve the log filter: `verbose` wins, then `RUST_LOG`, then the
/// configured level, then the default.
pub fn resolve_filter(verbose: bool, configured: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    configured
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool, configured: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(verbose, configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
