//! Self-advancing display widgets: a timed image slideshow with a manual
//! skip key, an externally controlled timeline driven through a fallback
//! cascade, and keyboard-controlled audio playback.
//!
//! Widgets never touch a clock or a window directly. They receive an
//! [`environment::Environment`] for timers and listeners, which keeps every
//! state machine here deterministic under test.

pub mod audio;
pub mod config;
pub mod constants;
pub mod engine;
pub mod environment;
pub mod error;
pub mod runtime;
pub mod sequence;
pub mod slideshow;
pub mod state;
pub mod timeline;
pub mod timer;

#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::{Error, Result};
