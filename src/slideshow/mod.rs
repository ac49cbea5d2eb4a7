//! Image slideshow: timed advance, manual skip key, transition overlay.

mod advance;
mod engine;

pub use advance::{Advancement, SlideView};
pub use engine::SlideshowEngine;
