use log::{debug, info, warn};

use crate::config::CascadeConfig;
use crate::constants::READY_SIGNAL;
use crate::engine::Widget;
use crate::environment::{Environment, Event, EventKind, ListenerHandle, TimerHandle};
use crate::timeline::probe::{Step, run_steps};
use crate::timeline::view::{TimelineLibrary, TimelineOptions};
use crate::timer::TimerSlot;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CascadeState {
    Uninitialized,       // Not mounted
    WaitingForReadiness, // Library still loading
    Active,              // View constructed, tick running
    ReloadIssued,        // Page is being discarded
}

/// Drives an externally controlled timeline forward on a recurring tick,
/// falling back through progressively heavier actions.
pub struct FallbackCascade<L: TimelineLibrary> {
    library: L,
    options: TimelineOptions,
    config: CascadeConfig,
    state: CascadeState,
    view: Option<L::View>,
    tick: TimerSlot,
    watchdog: TimerSlot,
    ready_listener: Option<ListenerHandle>,
}

impl<L: TimelineLibrary> FallbackCascade<L> {
    pub fn new(library: L, options: TimelineOptions, config: CascadeConfig) -> Self {
        Self {
            library,
            options,
            config,
            state: CascadeState::Uninitialized,
            view: None,
            tick: TimerSlot::new(),
            watchdog: TimerSlot::new(),
            ready_listener: None,
        }
    }

    pub fn state(&self) -> CascadeState {
        self.state
    }

    pub fn view(&self) -> Option<&L::View> {
        self.view.as_ref()
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut L {
        &mut self.library
    }

    /// One cascade pass. Returns the step taken, if any.
    pub fn tick(&mut self, env: &mut dyn Environment) -> Option<Step> {
        if self.state != CascadeState::Active {
            return None;
        }
        let view = self.view.as_mut()?;
        let step = run_steps(view, self.config.reload_fallback);
        match step {
            Some(Step::Reload) => self.issue_reload(env, "no way to advance the timeline"),
            Some(step) => info!("timeline advanced via {step}"),
            None => debug!("timeline tick found nothing to advance"),
        }
        step
    }

    fn activate(&mut self, env: &mut dyn Environment) {
        self.view = Some(self.library.construct(&self.options));
        self.tick.start_interval(env, self.config.tick_period);
        if let Some(after) = self.config.watchdog {
            self.watchdog.start_timeout(env, after);
        }
        self.state = CascadeState::Active;
        info!(
            "timeline active, ticking every {:?}, watchdog {:?}",
            self.config.tick_period, self.config.watchdog
        );
    }

    fn issue_reload(&mut self, env: &mut dyn Environment, reason: &str) {
        warn!("timeline requesting reload: {reason}");
        self.tick.cancel(env);
        self.watchdog.cancel(env);
        self.state = CascadeState::ReloadIssued;
        env.request_reload();
    }

    fn stop_listening(&mut self, env: &mut dyn Environment) {
        if let Some(listener) = self.ready_listener.take() {
            env.remove_listener(listener);
        }
    }
}

impl<L: TimelineLibrary> Widget for FallbackCascade<L> {
    fn name(&self) -> &'static str {
        "timeline"
    }

    fn mount(&mut self, env: &mut dyn Environment) {
        if self.state != CascadeState::Uninitialized {
            return;
        }
        if self.library.is_ready() {
            self.activate(env);
        } else {
            self.ready_listener = Some(env.add_listener(EventKind::Signal(READY_SIGNAL.to_string())));
            self.state = CascadeState::WaitingForReadiness;
            debug!("timeline waiting for {READY_SIGNAL}");
        }
    }

    fn on_timer(&mut self, handle: TimerHandle, env: &mut dyn Environment) -> bool {
        if self.tick.owns(handle) {
            self.tick(env);
            true
        } else if self.watchdog.fired(handle) {
            self.issue_reload(env, "watchdog expired");
            true
        } else {
            false
        }
    }

    fn on_event(&mut self, listener: ListenerHandle, event: &Event, env: &mut dyn Environment) -> bool {
        if self.ready_listener != Some(listener) {
            return false;
        }
        if let Event::Signal(name) = event {
            if name == READY_SIGNAL && self.state == CascadeState::WaitingForReadiness {
                if self.library.is_ready() {
                    self.stop_listening(env);
                    self.activate(env);
                } else {
                    warn!("{READY_SIGNAL} received but the library is not loaded");
                }
            }
        }
        true
    }

    fn unmount(&mut self, env: &mut dyn Environment) {
        self.tick.cancel(env);
        self.watchdog.cancel(env);
        self.stop_listening(env);
        self.view = None;
        self.state = CascadeState::Uninitialized;
    }
}
