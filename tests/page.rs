use std::time::Duration;

use showreel::audio::{AudioControl, AudioResource, PlaybackError};
use showreel::config::{AudioKeys, CascadeConfig, SlideshowConfig};
use showreel::constants::READY_SIGNAL;
use showreel::environment::Key;
use showreel::runtime::Runtime;
use showreel::sequence::ItemSequence;
use showreel::slideshow::SlideshowEngine;
use showreel::timeline::deck::{DeckApi, DeckLibrary};
use showreel::timeline::{CascadeState, FallbackCascade, TimelineOptions};

#[derive(Default)]
struct Track {
    paused: bool,
    position: Duration,
}

impl AudioResource for Track {
    fn pause(&mut self) {
        self.paused = true;
    }

    fn rewind(&mut self) {
        self.position = Duration::ZERO;
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        self.paused = false;
        Ok(())
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn position(&self) -> Duration {
        self.position
    }
}

fn slideshow() -> SlideshowEngine {
    let items = (0..4).map(|i| format!("/posters/{i}.png")).collect();
    let sequence = ItemSequence::new(items, Some("/posters/fabric-8.png".into())).unwrap();
    SlideshowEngine::new(sequence, SlideshowConfig::default())
}

fn timeline(api: DeckApi) -> FallbackCascade<DeckLibrary> {
    FallbackCascade::new(DeckLibrary::new(11, api), TimelineOptions::default(), CascadeConfig::kiosk())
}

#[test]
fn unmounting_at_any_point_leaves_nothing_scheduled() {
    for stop_after in [0, 1, 15, 31, 99, 111, 250] {
        let mut show = slideshow();
        let mut cascade = timeline(DeckApi::Next);
        let mut audio = AudioControl::new(Track::default(), AudioKeys::default());
        let mut rt = Runtime::new();

        rt.mount(&mut [&mut show, &mut cascade, &mut audio]);
        rt.advance(Duration::from_secs(1), &mut [&mut show, &mut cascade, &mut audio]);
        cascade.library_mut().load();
        rt.emit(READY_SIGNAL, &mut [&mut show, &mut cascade, &mut audio]);
        rt.press(Key::from("m"), &mut [&mut show, &mut cascade, &mut audio]);
        rt.advance(Duration::from_secs(stop_after), &mut [&mut show, &mut cascade, &mut audio]);

        rt.unmount(&mut [&mut show, &mut cascade, &mut audio]);
        assert_eq!(rt.env().pending_timers(), 0, "timers left after {stop_after} s");
        assert_eq!(rt.env().listener_count(), 0, "listeners left after {stop_after} s");

        let state = show.state();
        let reloads = rt.reloads();
        rt.advance(Duration::from_secs(1_000), &mut [&mut show, &mut cascade, &mut audio]);
        assert_eq!(show.state(), state);
        assert_eq!(rt.reloads(), reloads);
        assert_eq!(cascade.state(), CascadeState::Uninitialized);
    }
}

#[test]
fn watchdog_reload_restarts_the_whole_page() {
    let mut show = slideshow();
    let mut cascade = timeline(DeckApi::GoToNext);
    cascade.library_mut().load();
    let mut rt = Runtime::new();
    rt.mount(&mut [&mut show, &mut cascade]);

    rt.advance(Duration::from_secs(100), &mut [&mut show, &mut cascade]);
    assert_eq!(show.state().current, 3);
    assert_eq!(cascade.view().map(|v| v.position()), Some(10));

    rt.advance(Duration::from_secs(10), &mut [&mut show, &mut cascade]);
    assert_eq!(rt.reloads(), 1);
    assert_eq!(show.state().current, 0);
    assert_eq!(cascade.view().map(|v| v.position()), Some(0));
    assert_eq!(cascade.library().built(), 2);
    // fresh auto-advance, overlay already gone, tick and watchdog
    assert_eq!(rt.env().pending_timers(), 3);
}

#[test]
fn timeline_without_controls_or_watchdog_never_reloads_in_relaxed_mode() {
    let mut library = DeckLibrary::new(2, DeckApi::None);
    library.load();
    let mut cascade = FallbackCascade::new(library, TimelineOptions::default(), CascadeConfig::relaxed());
    let mut rt = Runtime::new();
    rt.mount(&mut [&mut cascade]);

    rt.advance(Duration::from_secs(600), &mut [&mut cascade]);
    assert_eq!(rt.reloads(), 0);
    assert_eq!(cascade.state(), CascadeState::Active);
}

#[test]
fn audio_keys_do_not_move_the_slideshow() {
    let mut show = slideshow();
    let mut audio = AudioControl::new(Track::default(), AudioKeys::default());
    let mut rt = Runtime::new();
    rt.mount(&mut [&mut show, &mut audio]);

    for key in ["r", "p", "c", "R"] {
        rt.press(Key::from(key), &mut [&mut show, &mut audio]);
    }
    assert_eq!(show.state().current, 0);
    assert!(!audio.resource().is_paused());
}
