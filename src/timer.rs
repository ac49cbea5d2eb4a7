use std::time::Duration;

use crate::environment::{Environment, TimerHandle};

/// Owns at most one pending timer. Starting a new one cancels the previous.
#[derive(Debug, Default)]
pub struct TimerSlot {
    handle: Option<TimerHandle>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_timeout(&mut self, env: &mut dyn Environment, delay: Duration) -> TimerHandle {
        self.cancel(env);
        let handle = env.set_timeout(delay);
        self.handle = Some(handle);
        handle
    }

    pub fn start_interval(&mut self, env: &mut dyn Environment, period: Duration) -> TimerHandle {
        self.cancel(env);
        let handle = env.set_interval(period);
        self.handle = Some(handle);
        handle
    }

    /// Returns `true` if a timer was pending.
    pub fn cancel(&mut self, env: &mut dyn Environment) -> bool {
        match self.handle.take() {
            Some(handle) => env.clear_timer(handle),
            None => false,
        }
    }

    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.handle == Some(handle)
    }

    /// Matches a fired one-shot timer and empties the slot.
    pub fn fired(&mut self, handle: TimerHandle) -> bool {
        if self.owns(handle) {
            self.handle = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }
}
