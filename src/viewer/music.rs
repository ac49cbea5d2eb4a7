use std::path::Path;
use std::time::Duration;

use anyhow::{Result, anyhow};
use raylib::core::audio::{Music, RaylibAudio};

use crate::audio::{AudioResource, PlaybackError};

/// A raylib music stream. Must be pumped with [`RaylibTrack::update`] every frame.
pub struct RaylibTrack<'aud> {
    music: Music<'aud>,
    started: bool,
}

impl<'aud> RaylibTrack<'aud> {
    pub fn load(device: &'aud RaylibAudio, path: &Path) -> Result<Self> {
        let name = path.to_str().ok_or_else(|| anyhow!("non UTF-8 audio path {}", path.display()))?;
        let music = device
            .new_music(name)
            .map_err(|e| anyhow!("failed to load {}: {e}", path.display()))?;
        Ok(Self { music, started: false })
    }

    pub fn update(&self) {
        self.music.update_stream();
    }
}

impl AudioResource for RaylibTrack<'_> {
    fn pause(&mut self) {
        self.music.pause_stream();
    }

    fn rewind(&mut self) {
        self.music.seek_stream(0.0);
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.started {
            self.music.resume_stream();
        } else {
            self.music.play_stream();
            self.started = true;
        }
        Ok(())
    }

    fn is_paused(&self) -> bool {
        !self.music.is_stream_playing()
    }

    fn position(&self) -> Duration {
        Duration::try_from_secs_f32(self.music.get_time_played()).unwrap_or_default()
    }
}
