//! Runtime configuration. Defaults come from [`crate::constants`]; the binary
//! overrides them from command-line flags.

use std::time::Duration;

use crate::constants::*;
use crate::environment::Key;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideshowConfig {
    /// Delay before an automatic advance. Every advance restarts it.
    pub auto_advance: Duration,
    /// How long the outgoing item stays rendered after an advance.
    pub overlay: Duration,
    pub manual_key: Key,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            auto_advance: AUTO_ADVANCE_PERIOD,
            overlay: OVERLAY_DURATION,
            manual_key: Key::new(MANUAL_ADVANCE_KEY),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CascadeConfig {
    pub tick_period: Duration,
    /// One-shot hard reload, independent of the tick outcome.
    pub watchdog: Option<Duration>,
    /// Reload when neither a callable nor a control could advance.
    pub reload_fallback: bool,
}

impl CascadeConfig {
    /// Wall display variant: fast tick, watchdog, reload as last resort.
    pub fn kiosk() -> Self {
        Self {
            tick_period: CASCADE_TICK_PERIOD,
            watchdog: Some(WATCHDOG_DURATION),
            reload_fallback: true,
        }
    }

    /// Slower tick that never reloads the page on its own.
    pub fn relaxed() -> Self {
        Self {
            tick_period: RELAXED_TICK_PERIOD,
            watchdog: None,
            reload_fallback: false,
        }
    }
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self::kiosk()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioKeys {
    pub restart: Key,
    pub pause: Key,
    pub resume: Key,
}

impl Default for AudioKeys {
    fn default() -> Self {
        Self {
            restart: Key::new(AUDIO_RESTART_KEY),
            pause: Key::new(AUDIO_PAUSE_KEY),
            resume: Key::new(AUDIO_RESUME_KEY),
        }
    }
}
