use std::fmt;

use log::debug;
use thiserror::Error;

use crate::timeline::view::{ControlRole, TimelineView};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("capability not exposed")]
    Missing,

    #[error("capability raised: {0}")]
    Raised(String),
}

/// Result of one best-effort probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    Applied,
    Unavailable,
    Faulted,
}

/// Cascade steps in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    GoToNext,
    Next,
    NextControl,
    RestartControl,
    Reload,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Step::GoToNext => "goToNext()",
            Step::Next => "next()",
            Step::NextControl => "next control",
            Step::RestartControl => "restart control",
            Step::Reload => "reload",
        };
        f.write_str(label)
    }
}

const CALLABLES: [Step; 2] = [Step::GoToNext, Step::Next];

/// Runs an external call whose contract is not trusted. Failures are logged
/// and folded into the outcome, never propagated.
pub fn best_effort<F>(step: Step, call: F) -> ProbeOutcome
where
    F: FnOnce() -> Result<(), CapabilityError>,
{
    match call() {
        Ok(()) => ProbeOutcome::Applied,
        Err(CapabilityError::Missing) => ProbeOutcome::Unavailable,
        Err(err) => {
            debug!("{step} failed, falling through: {err}");
            ProbeOutcome::Faulted
        }
    }
}

fn call<V: TimelineView + ?Sized>(view: &mut V, step: Step) -> Result<(), CapabilityError> {
    match step {
        Step::GoToNext => view.go_to_next(),
        Step::Next => view.next(),
        _ => Err(CapabilityError::Missing),
    }
}

/// One pass over the cascade. Returns the step that advanced the view, or
/// `Step::Reload` when the caller must reload. `None` when nothing applied
/// and reloading is not allowed.
///
/// A faulting callable skips the remaining callables and goes straight to
/// the controls.
pub fn run_steps<V: TimelineView + ?Sized>(view: &mut V, reload_fallback: bool) -> Option<Step> {
    for step in CALLABLES {
        match best_effort(step, || call(view, step)) {
            ProbeOutcome::Applied => return Some(step),
            ProbeOutcome::Unavailable => continue,
            ProbeOutcome::Faulted => break,
        }
    }

    if let Some(control) = view.find_control(ControlRole::Next).filter(|c| c.visible) {
        view.activate(&control);
        return Some(Step::NextControl);
    }

    if let Some(control) = view.find_control(ControlRole::Restart) {
        view.activate(&control);
        return Some(Step::RestartControl);
    }

    reload_fallback.then_some(Step::Reload)
}
