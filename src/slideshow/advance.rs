use std::time::Duration;

use crate::sequence::ItemSequence;
use crate::state::{Effect, Stride, TransitionState};

/// What the render layer needs for one frame.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SlideView<'a> {
    pub current: &'a str,
    pub current_index: usize,
    pub previous: Option<&'a str>,
    pub previous_index: Option<usize>,
    pub overlay_active: bool,
}

/// Pure advancement state machine. Timer work is returned as [`Effect`]s.
#[derive(Debug, Clone)]
pub struct Advancement {
    sequence: ItemSequence,
    state: TransitionState,
    auto_advance: Duration,
    overlay: Duration,
}

impl Advancement {
    pub fn new(sequence: ItemSequence, auto_advance: Duration, overlay: Duration) -> Self {
        Self {
            sequence,
            state: TransitionState::default(),
            auto_advance,
            overlay,
        }
    }

    /// Back to the first item with no overlay, as on a fresh mount.
    pub fn reset(&mut self) {
        self.state = TransitionState::default();
    }

    /// Arms the first automatic countdown.
    pub fn start(&self) -> Effect {
        Effect::RestartAutoAdvance(self.auto_advance)
    }

    pub fn advance(&mut self, stride: Stride) -> [Effect; 2] {
        self.state.advance(stride, self.sequence.len());
        [
            Effect::ScheduleOverlayClear(self.overlay),
            Effect::RestartAutoAdvance(self.auto_advance),
        ]
    }

    /// Stride for a manual press: lands on the next content item.
    pub fn manual_stride(&self) -> Stride {
        if !self.sequence.has_buffer() || self.sequence.is_buffer(self.state.current) {
            Stride::Single
        } else {
            Stride::Skip
        }
    }

    pub fn clear_overlay(&mut self) {
        self.state.clear_overlay();
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn overlay(&self) -> Duration {
        self.overlay
    }

    pub fn sequence(&self) -> &ItemSequence {
        &self.sequence
    }

    pub fn view(&self) -> SlideView<'_> {
        SlideView {
            current: self.sequence.get(self.state.current),
            current_index: self.state.current,
            previous: self.state.previous.map(|i| self.sequence.get(i)),
            previous_index: self.state.previous,
            overlay_active: self.state.overlay_active,
        }
    }
}
