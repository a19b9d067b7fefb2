//! Log setup for the `orion` binary

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging to stderr.
///
/// `RUST_LOG` overrides the default filter, which shows warnings only so
/// diagnostics never mix with program output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
