use std::collections::BTreeMap;
use std::time::Duration;

use log::debug;

use super::{Environment, EventKind, ListenerHandle, TimerHandle};
use crate::constants::MIN_INTERVAL_PERIOD;

#[derive(Debug, Clone, Copy)]
struct Timer {
    due: Duration,
    period: Option<Duration>,
}

/// Deterministic environment driven by an explicit clock.
///
/// The clock only moves when the owner calls [`SimEnv::pop_due`] or
/// [`SimEnv::set_now`]. Timers due at the same instant fire in creation order.
#[derive(Debug, Default)]
pub struct SimEnv {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<u64, Timer>,
    listeners: BTreeMap<u64, EventKind>,
    reload_requested: bool,
}

impl SimEnv {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its due time. Intervals are re-armed one period later.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerHandle> {
        let (&id, &timer) = self
            .timers
            .iter()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(id, t)| (t.due, **id))?;

        self.now = self.now.max(timer.due);
        match timer.period {
            Some(period) => {
                if let Some(t) = self.timers.get_mut(&id) {
                    t.due = timer.due + period;
                }
            }
            None => {
                self.timers.remove(&id);
            }
        }
        Some(TimerHandle(id))
    }

    /// Moves the clock forward without firing anything. Never moves it back.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    pub fn listeners(&self, kind: &EventKind) -> Vec<ListenerHandle> {
        self.listeners
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(id, _)| ListenerHandle(*id))
            .collect()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle.0)
    }

    pub fn has_listener(&self, handle: ListenerHandle) -> bool {
        self.listeners.contains_key(&handle.0)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns and clears the pending reload request.
    pub fn take_reload(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    /// Drops every timer and listener, as navigating away from a page does.
    /// The clock keeps running.
    pub fn reset(&mut self) {
        self.timers.clear();
        self.listeners.clear();
        self.reload_requested = false;
    }
}

impl Environment for SimEnv {
    fn now(&self) -> Duration {
        self.now
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerHandle {
        let id = self.allocate_id();
        self.timers.insert(id, Timer { due: self.now + delay, period: None });
        debug!("timeout #{id} armed for {delay:?}");
        TimerHandle(id)
    }

    fn set_interval(&mut self, period: Duration) -> TimerHandle {
        let period = period.max(MIN_INTERVAL_PERIOD);
        let id = self.allocate_id();
        self.timers.insert(id, Timer { due: self.now + period, period: Some(period) });
        debug!("interval #{id} armed every {period:?}");
        TimerHandle(id)
    }

    fn clear_timer(&mut self, handle: TimerHandle) -> bool {
        let cleared = self.timers.remove(&handle.0).is_some();
        if cleared {
            debug!("timer #{} cleared", handle.0);
        }
        cleared
    }

    fn add_listener(&mut self, kind: EventKind) -> ListenerHandle {
        let id = self.allocate_id();
        self.listeners.insert(id, kind);
        ListenerHandle(id)
    }

    fn remove_listener(&mut self, handle: ListenerHandle) -> bool {
        self.listeners.remove(&handle.0).is_some()
    }

    fn request_reload(&mut self) {
        self.reload_requested = true;
    }
}
