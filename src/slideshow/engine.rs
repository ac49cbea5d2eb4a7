use log::{debug, info};

use crate::config::SlideshowConfig;
use crate::engine::Widget;
use crate::environment::{Environment, Event, EventKind, Key, ListenerHandle, TimerHandle};
use crate::sequence::ItemSequence;
use crate::slideshow::advance::{Advancement, SlideView};
use crate::state::{Effect, Stride, TransitionState};
use crate::timer::TimerSlot;

/// Slideshow widget: automatic advance on a timer, manual advance on a key.
pub struct SlideshowEngine {
    advancement: Advancement,
    manual_key: Key,
    auto_timer: TimerSlot,
    overlay_timer: TimerSlot,
    key_listener: Option<ListenerHandle>,
    advances: u64,
}

impl SlideshowEngine {
    pub fn new(sequence: ItemSequence, config: SlideshowConfig) -> Self {
        Self {
            advancement: Advancement::new(sequence, config.auto_advance, config.overlay),
            manual_key: config.manual_key,
            auto_timer: TimerSlot::new(),
            overlay_timer: TimerSlot::new(),
            key_listener: None,
            advances: 0,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.key_listener.is_some()
    }

    pub fn state(&self) -> TransitionState {
        self.advancement.state()
    }

    pub fn view(&self) -> SlideView<'_> {
        self.advancement.view()
    }

    /// Advances performed since construction.
    pub fn advances(&self) -> u64 {
        self.advances
    }

    pub fn sequence(&self) -> &ItemSequence {
        self.advancement.sequence()
    }

    pub fn overlay_duration(&self) -> std::time::Duration {
        self.advancement.overlay()
    }

    /// Advances immediately and restarts the automatic countdown.
    pub fn advance(&mut self, stride: Stride, env: &mut dyn Environment) {
        let from = self.advancement.state().current;
        let effects = self.advancement.advance(stride);
        self.advances += 1;
        info!(
            "slide {from} -> {} ({})",
            self.advancement.state().current,
            self.advancement.view().current
        );
        for effect in effects {
            self.apply(effect, env);
        }
    }

    fn apply(&mut self, effect: Effect, env: &mut dyn Environment) {
        match effect {
            Effect::RestartAutoAdvance(delay) => {
                self.auto_timer.start_timeout(env, delay);
            }
            Effect::ScheduleOverlayClear(delay) => {
                self.overlay_timer.start_timeout(env, delay);
            }
        }
    }
}

impl Widget for SlideshowEngine {
    fn name(&self) -> &'static str {
        "slideshow"
    }

    fn mount(&mut self, env: &mut dyn Environment) {
        if self.is_mounted() {
            return;
        }
        self.advancement.reset();
        self.key_listener = Some(env.add_listener(EventKind::KeyDown));
        let effect = self.advancement.start();
        self.apply(effect, env);
        debug!(
            "slideshow mounted with {} slides",
            self.advancement.sequence().len()
        );
    }

    fn on_timer(&mut self, handle: TimerHandle, env: &mut dyn Environment) -> bool {
        if self.auto_timer.fired(handle) {
            self.advance(Stride::Single, env);
            true
        } else if self.overlay_timer.fired(handle) {
            self.advancement.clear_overlay();
            true
        } else {
            false
        }
    }

    fn on_event(&mut self, listener: ListenerHandle, event: &Event, env: &mut dyn Environment) -> bool {
        if self.key_listener != Some(listener) {
            return false;
        }
        if let Event::KeyDown(key) = event {
            if *key == self.manual_key {
                let stride = self.advancement.manual_stride();
                self.advance(stride, env);
            }
        }
        true
    }

    fn unmount(&mut self, env: &mut dyn Environment) {
        self.auto_timer.cancel(env);
        self.overlay_timer.cancel(env);
        if let Some(listener) = self.key_listener.take() {
            env.remove_listener(listener);
        }
        debug!("slideshow unmounted");
    }
}
