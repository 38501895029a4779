//! Diagnostic logging setup
//!
//! Library code only emits `tracing` events; the binary decides where they go.
//! Events are written to stderr so they never mix with game output.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "wordle_bot=debug" } else { "warn" }
}

/// Install the global fmt subscriber
///
/// `RUST_LOG` wins over `verbose` when both are given. Calling this twice is
/// harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
