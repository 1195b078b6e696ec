#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Library code logs through `tagpick_core::debug!` and friends. With the
//! `tracing` feature these are the `tracing` macros; without it they expand
//! to nothing, so widget state transitions cost nothing when logging is off.
//!
//! The `tracing-json` feature adds [`init_subscriber`] for binaries.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, info, trace, warn};

// Without the `tracing` feature the event macros swallow their arguments.
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op `debug!` when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op `error!` when tracing is disabled.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    /// No-op `info!` when tracing is disabled.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op `trace!` when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op `warn!` when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_directive` when `RUST_LOG` is unset or invalid.
/// With `json` set, events are emitted as one JSON object per line.
/// Output goes to stderr. Returns `false` if a global subscriber was
/// already installed.
#[cfg(feature = "tracing-json")]
pub fn init_subscriber(default_directive: &str, json: bool) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
