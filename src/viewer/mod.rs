//! raylib front-end: renders the slideshow, feeds it keys and frame time.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};
use raylib::core::audio::RaylibAudio;
use raylib::prelude::*;

mod music;
mod slide;
mod texture_loader;

use crate::audio::AudioControl;
use crate::config::AudioKeys;
use crate::constants::*;
use crate::engine::Widget;
use crate::environment::Key;
use crate::runtime::Runtime;
use crate::slideshow::SlideshowEngine;
use music::RaylibTrack;
use slide::{Slide, draw_placeholder};
use texture_loader::load_texture_with_exif_rotation;

/// Progress of the slide-in/slide-out animation for the current item.
struct Transition {
    advance: u64,
    tween: ease::Tween,
    progress: f32,
}

impl Transition {
    fn new(advance: u64, duration: f32) -> Self {
        Self {
            advance,
            tween: ease::Tween::new(ease::cubic_in_out, 0.0, 1.0, duration),
            progress: 0.0,
        }
    }

    fn update(&mut self, dt: f32) {
        self.progress = self.tween.apply(dt).clamp(0.0, 1.0);
    }
}

fn draw_item(d: &mut RaylibDrawHandle, slides: &HashMap<String, Slide>, item: &str, offset: f32) {
    match slides.get(item) {
        Some(slide) => slide.draw(d, offset),
        None => draw_placeholder(d, item, offset),
    }
}

/// Runs the window until it is closed. Unmounts everything on exit.
pub fn run(mut show: SlideshowEngine, audio_path: Option<&Path>) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Showreel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut slides: HashMap<String, Slide> = HashMap::new();
    for item in show.sequence().iter() {
        if slides.contains_key(item) {
            continue;
        }
        match load_texture_with_exif_rotation(&mut rl, &thread, Path::new(item)) {
            Ok(texture) => {
                slides.insert(item.to_string(), Slide::new(texture));
            }
            Err(e) => warn!("showing {item} as a placeholder: {e:#}"),
        }
    }

    let device = match audio_path {
        Some(_) => match RaylibAudio::init_audio_device() {
            Ok(device) => Some(device),
            Err(e) => {
                warn!("audio disabled: {e:?}");
                None
            }
        },
        None => None,
    };
    let mut audio = match (device.as_ref(), audio_path) {
        (Some(device), Some(path)) => Some(AudioControl::new(RaylibTrack::load(device, path)?, AudioKeys::default())),
        _ => None,
    };

    let overlay_secs = show.overlay_duration().as_secs_f32();
    let mut transition = Transition::new(show.advances(), overlay_secs);

    let mut rt = Runtime::new();
    {
        let mut widgets: Vec<&mut dyn Widget> = Vec::with_capacity(2);
        widgets.push(&mut show);
        if let Some(audio) = audio.as_mut() {
            widgets.push(audio);
        }
        rt.mount(&mut widgets);
    }
    info!("viewer open, {} of {} items loaded", slides.len(), show.sequence().len());

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        {
            let mut widgets: Vec<&mut dyn Widget> = Vec::with_capacity(2);
            widgets.push(&mut show);
            if let Some(audio) = audio.as_mut() {
                widgets.push(audio);
            }
            while let Some(c) = rl.get_char_pressed() {
                rt.press(Key::from(c), &mut widgets);
            }
            rt.advance(Duration::from_secs_f32(dt.max(0.0)), &mut widgets);
        }
        if let Some(audio) = audio.as_ref() {
            audio.resource().update();
        }

        if show.advances() != transition.advance {
            transition = Transition::new(show.advances(), overlay_secs);
        }
        transition.update(dt);
        let view = show.view();

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        match view.previous {
            Some(previous) if view.overlay_active => {
                // outgoing slides up and out while the incoming one rises from below
                draw_item(&mut d, &slides, previous, -transition.progress);
                draw_item(&mut d, &slides, view.current, 1.0 - transition.progress);
            }
            _ => draw_item(&mut d, &slides, view.current, 0.0),
        }
    }

    let mut widgets: Vec<&mut dyn Widget> = Vec::with_capacity(2);
    widgets.push(&mut show);
    if let Some(audio) = audio.as_mut() {
        widgets.push(audio);
    }
    rt.unmount(&mut widgets);
    Ok(())
}
