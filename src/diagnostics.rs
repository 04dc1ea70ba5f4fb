//! Logging setup. `RUST_LOG` controls verbosity the usual `tracing`
//! way; defaults to `warn` so a normal REPL session stays quiet.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. Safe to call more than once in
/// tests; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
