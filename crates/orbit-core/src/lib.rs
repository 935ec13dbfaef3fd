#![forbid(unsafe_code)]

//! Core: geometry, input events, locale context, and terminal lifecycle.

pub mod event;
pub mod geometry;
pub mod locale;
pub mod logging;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal_session;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
