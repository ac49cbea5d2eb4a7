//! Capabilities the widgets borrow from their host: timers, event listeners
//! and page reload.

use std::fmt;
use std::time::Duration;

mod sim;

pub use sim::SimEnv;


/// Handle to a scheduled timeout or interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub(crate) u64);

/// Handle to a registered event listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerHandle(pub(crate) u64);

/// Keyboard key identity, lower-cased so comparisons are case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key(String);

impl Key {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self(c.to_lowercase().collect())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a listener subscribes to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    Signal(String),
}

/// A dispatched event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    KeyDown(Key),
    Signal(String),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::KeyDown(_) => EventKind::KeyDown,
            Event::Signal(name) => EventKind::Signal(name.clone()),
        }
    }
}

/// Host capabilities injected into every widget.
///
/// Cancelling a handle guarantees its callback is never delivered, even if
/// the timer was already due in the current step.
pub trait Environment {
    fn now(&self) -> Duration;

    fn set_timeout(&mut self, delay: Duration) -> TimerHandle;

    fn set_interval(&mut self, period: Duration) -> TimerHandle;

    /// Returns `false` when the handle was not pending.
    fn clear_timer(&mut self, handle: TimerHandle) -> bool;

    fn add_listener(&mut self, kind: EventKind) -> ListenerHandle;

    fn remove_listener(&mut self, handle: ListenerHandle) -> bool;

    /// Ask the host to discard the page and start over.
    fn request_reload(&mut self);
}
