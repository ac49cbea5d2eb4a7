//! Keyboard-driven control of a single audio track.

use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

use crate::config::AudioKeys;
use crate::engine::Widget;
use crate::environment::{Environment, Event, EventKind, Key, ListenerHandle, TimerHandle};


#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("playback blocked: {0}")]
    Blocked(String),

    #[error("audio device unavailable")]
    NoDevice,
}

/// A single playable resource, exclusively owned by its [`AudioControl`].
pub trait AudioResource {
    fn pause(&mut self);
    fn rewind(&mut self);
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn is_paused(&self) -> bool;
    fn position(&self) -> Duration;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AudioAction {
    Restart,
    Pause,
    Resume,
}

pub struct AudioControl<R: AudioResource> {
    resource: R,
    keys: AudioKeys,
    listener: Option<ListenerHandle>,
}

impl<R: AudioResource> AudioControl<R> {
    pub fn new(resource: R, keys: AudioKeys) -> Self {
        Self { resource, keys, listener: None }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut R {
        &mut self.resource
    }

    pub fn action_for(&self, key: &Key) -> Option<AudioAction> {
        if *key == self.keys.restart {
            Some(AudioAction::Restart)
        } else if *key == self.keys.pause {
            Some(AudioAction::Pause)
        } else if *key == self.keys.resume {
            Some(AudioAction::Resume)
        } else {
            None
        }
    }

    pub fn perform(&mut self, action: AudioAction) {
        match action {
            AudioAction::Restart => {
                self.resource.pause();
                self.resource.rewind();
                self.play();
            }
            AudioAction::Pause => self.resource.pause(),
            AudioAction::Resume => {
                // Starting fresh and resuming from zero are the same call.
                if self.resource.is_paused() {
                    self.play();
                }
            }
        }
        info!("audio {action:?} at {:?}", self.resource.position());
    }

    fn play(&mut self) {
        if let Err(err) = self.resource.play() {
            debug!("ignoring rejected playback: {err}");
        }
    }
}

impl<R: AudioResource> Widget for AudioControl<R> {
    fn name(&self) -> &'static str {
        "audio"
    }

    fn mount(&mut self, env: &mut dyn Environment) {
        if self.listener.is_none() {
            self.listener = Some(env.add_listener(EventKind::KeyDown));
        }
    }

    fn on_timer(&mut self, _handle: TimerHandle, _env: &mut dyn Environment) -> bool {
        false
    }

    fn on_event(&mut self, listener: ListenerHandle, event: &Event, _env: &mut dyn Environment) -> bool {
        if self.listener != Some(listener) {
            return false;
        }
        if let Event::KeyDown(key) = event {
            if let Some(action) = self.action_for(key) {
                self.perform(action);
            }
        }
        true
    }

    fn unmount(&mut self, env: &mut dyn Environment) {
        if let Some(listener) = self.listener.take() {
            env.remove_listener(listener);
        }
    }
}
