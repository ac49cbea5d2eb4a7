//! Externally controlled timeline: readiness wait, recurring advance tick
//! with a fallback cascade, and an optional hard-reload watchdog.

mod cascade;
pub mod deck;
mod probe;
mod view;

pub use cascade::{CascadeState, FallbackCascade};
pub use probe::{CapabilityError, ProbeOutcome, Step, best_effort, run_steps};
pub use view::{Control, ControlRole, TimelineLibrary, TimelineOptions, TimelineView, TimenavPosition};

#[cfg(test)]
mod tests;
