//! Diagnostic logging for the command-line shell.
//!
//! The engine emits `tracing` events and the config loader uses `log`; both
//! end up in one stderr subscriber installed here. `RUST_LOG` takes
//! precedence over the `-v` count.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count: warn, info, debug, trace.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
