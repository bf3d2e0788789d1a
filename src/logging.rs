//! `tracing-subscriber` setup for the driver binary.
//!
//! The library only emits `tracing` events; nothing is printed unless a binary
//! installs a subscriber. Output goes to stderr so that stdout carries only the
//! resolution result.

use tracing_subscriber::EnvFilter;

use crate::config::ENV_LOG;

/// Default filter directive for a `-v` repetition count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `OPTRESOLVE_LOG` takes precedence over `verbosity` when it holds a valid
/// filter. Calling this twice is harmless; the second install is ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init();
}
