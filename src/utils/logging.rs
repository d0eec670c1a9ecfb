use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `branch_sweep=debug`.
pub const LOG_ENV: &str = "BRANCH_SWEEP_LOG";

/// Maps the `-v` count to a default filter level.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}
