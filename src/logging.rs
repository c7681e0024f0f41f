//! Diagnostic logging
//!
//! Logs go to stderr so they never mix with NDJSON on stdout.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity level.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "sprout=warn",
        1 => "sprout=debug",
        _ => "sprout=trace",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `-v`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .try_init();
}
