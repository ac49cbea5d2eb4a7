use crate::constants::{NEXT_CONTROL_SELECTORS, RESTART_CONTROL_SELECTORS, TIMELINE_INITIAL_ZOOM, TIMELINE_SOURCE};
use crate::timeline::probe::CapabilityError;

/// Navigation controls rendered by the timeline library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlRole {
    Next,
    Restart,
}

impl ControlRole {
    pub fn selectors(self) -> &'static [&'static str] {
        match self {
            ControlRole::Next => NEXT_CONTROL_SELECTORS,
            ControlRole::Restart => RESTART_CONTROL_SELECTORS,
        }
    }
}

/// A control element found in the timeline container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub role: ControlRole,
    pub selector: &'static str,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimenavPosition {
    #[default]
    Top,
    Bottom,
}

/// Construction options handed to the library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineOptions {
    pub source: String,
    pub timenav_position: TimenavPosition,
    pub initial_zoom: u8,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            source: TIMELINE_SOURCE.to_string(),
            timenav_position: TimenavPosition::Top,
            initial_zoom: TIMELINE_INITIAL_ZOOM,
        }
    }
}

/// A constructed timeline. Both callables are optional; the defaults
/// report them as not exposed.
pub trait TimelineView {
    fn go_to_next(&mut self) -> Result<(), CapabilityError> {
        Err(CapabilityError::Missing)
    }

    fn next(&mut self) -> Result<(), CapabilityError> {
        Err(CapabilityError::Missing)
    }

    fn find_control(&self, role: ControlRole) -> Option<Control>;

    fn activate(&mut self, control: &Control);
}

/// The externally loaded timeline library.
pub trait TimelineLibrary {
    type View: TimelineView;

    /// Whether the library has finished loading.
    fn is_ready(&self) -> bool;

    fn construct(&mut self, options: &TimelineOptions) -> Self::View;
}
