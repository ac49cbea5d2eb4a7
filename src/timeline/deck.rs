//! In-process timeline used by the headless `timeline` command.

use log::info;

use crate::timeline::probe::CapabilityError;
use crate::timeline::view::{Control, ControlRole, TimelineLibrary, TimelineOptions, TimelineView};

/// Which navigation callables the deck exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeckApi {
    #[default]
    None,
    GoToNext,
    Next,
    /// `goToNext` exists but always raises.
    Faulty,
}

#[derive(Debug, Clone)]
pub struct DeckLibrary {
    slides: usize,
    api: DeckApi,
    loaded: bool,
    built: usize,
}

impl DeckLibrary {
    pub fn new(slides: usize, api: DeckApi) -> Self {
        Self {
            slides: slides.max(1),
            api,
            loaded: false,
            built: 0,
        }
    }

    /// Finish "loading". The host emits the readiness signal afterwards.
    pub fn load(&mut self) {
        self.loaded = true;
    }

    /// Number of views constructed so far.
    pub fn built(&self) -> usize {
        self.built
    }
}

impl TimelineLibrary for DeckLibrary {
    type View = DeckView;

    fn is_ready(&self) -> bool {
        self.loaded
    }

    fn construct(&mut self, options: &TimelineOptions) -> DeckView {
        self.built += 1;
        info!(
            "building timeline from {} (timenav {:?}, zoom {})",
            options.source, options.timenav_position, options.initial_zoom
        );
        DeckView {
            slides: self.slides,
            api: self.api,
            position: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckView {
    slides: usize,
    api: DeckApi,
    position: usize,
}

impl DeckView {
    pub fn position(&self) -> usize {
        self.position
    }

    fn step(&mut self) {
        if self.position + 1 < self.slides {
            self.position += 1;
        }
    }
}

impl TimelineView for DeckView {
    fn go_to_next(&mut self) -> Result<(), CapabilityError> {
        match self.api {
            DeckApi::GoToNext => {
                self.step();
                Ok(())
            }
            DeckApi::Faulty => Err(CapabilityError::Raised("slide not rendered".to_string())),
            _ => Err(CapabilityError::Missing),
        }
    }

    fn next(&mut self) -> Result<(), CapabilityError> {
        match self.api {
            DeckApi::Next => {
                self.step();
                Ok(())
            }
            _ => Err(CapabilityError::Missing),
        }
    }

    fn find_control(&self, role: ControlRole) -> Option<Control> {
        let visible = match role {
            ControlRole::Next => self.position + 1 < self.slides,
            ControlRole::Restart => true,
        };
        Some(Control {
            role,
            selector: role.selectors()[0],
            visible,
        })
    }

    fn activate(&mut self, control: &Control) {
        match control.role {
            ControlRole::Next => self.step(),
            ControlRole::Restart => self.position = 0,
        }
        info!("clicked {} -> slide {}", control.selector, self.position);
    }
}
