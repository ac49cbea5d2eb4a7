//! Single-threaded host loop over a [`SimEnv`].
//!
//! Widgets stay owned by the caller and are passed in on every call, so the
//! front-end can read their state between steps. Timer callbacks and events
//! are delivered one at a time; a reload request discards the page (all
//! widgets unmounted, environment reset) and mounts the widgets again.

use std::time::Duration;

use log::{debug, warn};

use crate::engine::Widget;
use crate::environment::{Environment, Event, Key, SimEnv};

#[derive(Debug, Default)]
pub struct Runtime {
    env: SimEnv,
    reloads: usize,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn env(&self) -> &SimEnv {
        &self.env
    }

    pub fn now(&self) -> Duration {
        self.env.now()
    }

    /// Number of page reloads performed so far.
    pub fn reloads(&self) -> usize {
        self.reloads
    }

    pub fn mount(&mut self, widgets: &mut [&mut dyn Widget]) {
        for widget in widgets.iter_mut() {
            debug!("mounting {}", widget.name());
            widget.mount(&mut self.env);
        }
    }

    pub fn unmount(&mut self, widgets: &mut [&mut dyn Widget]) {
        for widget in widgets.iter_mut() {
            debug!("unmounting {}", widget.name());
            widget.unmount(&mut self.env);
        }
    }

    /// Runs every timer due within the next `dt`, then parks the clock at
    /// the end of the step.
    pub fn advance(&mut self, dt: Duration, widgets: &mut [&mut dyn Widget]) {
        let target = self.env.now() + dt;
        while let Some(handle) = self.env.pop_due(target) {
            let handled = widgets
                .iter_mut()
                .any(|widget| widget.on_timer(handle, &mut self.env));
            if !handled {
                warn!("timer {handle:?} fired without an owner");
            }
            self.reload_if_requested(widgets);
        }
        self.env.set_now(target);
    }

    pub fn press(&mut self, key: Key, widgets: &mut [&mut dyn Widget]) {
        self.dispatch(Event::KeyDown(key), widgets);
    }

    pub fn emit(&mut self, signal: &str, widgets: &mut [&mut dyn Widget]) {
        self.dispatch(Event::Signal(signal.to_string()), widgets);
    }

    fn dispatch(&mut self, event: Event, widgets: &mut [&mut dyn Widget]) {
        for listener in self.env.listeners(&event.kind()) {
            // An earlier handler may have removed this listener.
            if !self.env.has_listener(listener) {
                continue;
            }
            for widget in widgets.iter_mut() {
                if widget.on_event(listener, &event, &mut self.env) {
                    break;
                }
            }
            if self.reload_if_requested(widgets) {
                return;
            }
        }
    }

    fn reload_if_requested(&mut self, widgets: &mut [&mut dyn Widget]) -> bool {
        if !self.env.take_reload() {
            return false;
        }
        self.reloads += 1;
        warn!("reloading page (reload #{})", self.reloads);
        self.unmount(widgets);
        self.env.reset();
        self.mount(widgets);
        true
    }
}
