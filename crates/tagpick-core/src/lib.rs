#![forbid(unsafe_code)]

//! Core: input events, markup hooks, and the logging shim shared by the
//! tag picker crates.

pub mod event;
pub mod hooks;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
