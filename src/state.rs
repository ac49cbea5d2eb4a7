use std::time::Duration;

/// How far one advance moves.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Stride {
    Single, // Next item
    Skip,   // Two items ahead, jumping over a buffer slot
}

impl Stride {
    pub fn steps(self) -> usize {
        match self {
            Stride::Single => 1,
            Stride::Skip => 2,
        }
    }
}

/// Timer side effects requested by a transition.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Effect {
    RestartAutoAdvance(Duration), // Replace the pending automatic advance
    ScheduleOverlayClear(Duration), // Replace the pending overlay teardown
}

/// Current and outgoing index plus the transition overlay flag.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct TransitionState {
    pub current: usize,
    pub previous: Option<usize>,
    pub overlay_active: bool,
}

impl TransitionState {
    /// Moves `current` by `stride` modulo `len` and opens the overlay.
    /// `len` must be at least 1.
    pub fn advance(&mut self, stride: Stride, len: usize) {
        debug_assert!(len > 0);
        self.previous = Some(self.current);
        self.overlay_active = true;
        self.current = (self.current + stride.steps()) % len;
    }

    pub fn clear_overlay(&mut self) {
        self.previous = None;
        self.overlay_active = false;
    }
}
