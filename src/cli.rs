use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use showreel::config::{CascadeConfig, SlideshowConfig};
use showreel::constants::*;
use showreel::engine::Widget;
use showreel::environment::Key;
use showreel::runtime::Runtime;
use showreel::sequence::ItemSequence;
use showreel::slideshow::SlideshowEngine;
use showreel::timeline::deck::{DeckApi, DeckLibrary};
use showreel::timeline::{FallbackCascade, TimelineOptions};

#[derive(Parser, Debug)]
#[command(name = "showreel", version, about = "Self-advancing slideshow and timeline displays")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cycle through images on a timer, with a manual skip key
    Slideshow(SlideshowArgs),
    /// Drive a timeline forward through the fallback cascade
    Timeline(TimelineArgs),
}

#[derive(Args, Debug)]
pub struct SlideshowArgs {
    /// Items to show, in order (image paths or URLs)
    #[arg(required = true)]
    pub items: Vec<String>,

    /// Buffer item shown between every two items
    #[arg(long)]
    pub buffer: Option<String>,

    /// Use the stock buffer poster
    #[arg(long, conflicts_with = "buffer")]
    pub default_buffer: bool,

    /// Delay before an automatic advance
    #[arg(long, default_value_t = AUTO_ADVANCE_PERIOD.as_millis() as u64)]
    pub interval_ms: u64,

    /// Transition overlay duration
    #[arg(long, default_value_t = OVERLAY_DURATION.as_millis() as u64)]
    pub overlay_ms: u64,

    /// Manual advance key (case-insensitive)
    #[arg(long, default_value = MANUAL_ADVANCE_KEY)]
    pub key: String,

    /// Shuffle items before interleaving the buffer
    #[arg(long)]
    pub shuffle: bool,

    /// Simulated run length in seconds
    #[arg(long, default_value_t = 120.0)]
    pub run_for: f64,

    /// Scripted key press at a simulated time, as SECONDS=KEY (repeatable)
    #[arg(long = "press", value_parser = parse_press)]
    pub presses: Vec<KeyPress>,

    /// Open a window instead of simulating
    #[cfg(feature = "viewer")]
    #[arg(long)]
    pub window: bool,

    /// Audio track controlled with the r/p/c keys (window only)
    #[cfg(feature = "viewer")]
    #[arg(long, requires = "window")]
    pub audio: Option<std::path::PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ApiArg {
    None,
    GoToNext,
    Next,
    Faulty,
}

impl From<ApiArg> for DeckApi {
    fn from(arg: ApiArg) -> Self {
        match arg {
            ApiArg::None => DeckApi::None,
            ApiArg::GoToNext => DeckApi::GoToNext,
            ApiArg::Next => DeckApi::Next,
            ApiArg::Faulty => DeckApi::Faulty,
        }
    }
}

#[derive(Args, Debug)]
pub struct TimelineArgs {
    /// Data source handed to the timeline
    #[arg(long, default_value = TIMELINE_SOURCE)]
    pub source: String,

    /// Seconds between advance attempts
    #[arg(long, default_value_t = CASCADE_TICK_PERIOD.as_secs())]
    pub tick_secs: u64,

    /// Seconds before the watchdog forces a reload
    #[arg(long, default_value_t = WATCHDOG_DURATION.as_secs())]
    pub watchdog_secs: u64,

    #[arg(long)]
    pub no_watchdog: bool,

    /// Never reload when nothing could advance the timeline
    #[arg(long)]
    pub no_reload_fallback: bool,

    /// Number of slides in the simulated timeline
    #[arg(long, default_value_t = 11)]
    pub slides: usize,

    /// Navigation callables the simulated timeline exposes
    #[arg(long, value_enum, default_value_t = ApiArg::None)]
    pub api: ApiArg,

    /// Seconds until the library signals readiness
    #[arg(long, default_value_t = 2.0)]
    pub ready_after: f64,

    /// Simulated run length in seconds
    #[arg(long, default_value_t = 300.0)]
    pub run_for: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyPress {
    pub at: Duration,
    pub key: Key,
}

fn parse_press(s: &str) -> Result<KeyPress, showreel::Error> {
    let invalid = || showreel::Error::InvalidKeyPress(s.to_string());
    let (at, key) = s.split_once('=').ok_or_else(invalid)?;
    let at = at.trim().parse::<f64>().map_err(|_| invalid())?;
    let at = Duration::try_from_secs_f64(at).map_err(|_| invalid())?;
    if key.is_empty() {
        return Err(invalid());
    }
    Ok(KeyPress { at, key: Key::new(key) })
}

fn seconds(value: f64, flag: &str) -> Result<Duration> {
    Duration::try_from_secs_f64(value).with_context(|| format!("--{flag} must be a non-negative number of seconds"))
}

/// Replays scripted presses against virtual time, then runs to the end.
fn simulate(rt: &mut Runtime, widgets: &mut [&mut dyn Widget], mut presses: Vec<KeyPress>, run_for: Duration) {
    presses.sort_by_key(|p| p.at);
    for press in presses.into_iter().filter(|p| p.at <= run_for) {
        rt.advance(press.at.saturating_sub(rt.now()), widgets);
        info!("key `{}` at {:?}", press.key, rt.now());
        rt.press(press.key, widgets);
    }
    rt.advance(run_for.saturating_sub(rt.now()), widgets);
}

pub fn run_slideshow(args: SlideshowArgs) -> Result<()> {
    let buffer = args
        .buffer
        .or_else(|| args.default_buffer.then(|| DEFAULT_BUFFER_ITEM.to_string()));
    let mut sequence = ItemSequence::new(args.items, buffer).context("cannot build the slideshow")?;
    if args.shuffle {
        sequence = sequence.shuffled(&mut rand::rng());
    }
    if args.interval_ms == 0 {
        bail!("--interval-ms must be positive");
    }

    let config = SlideshowConfig {
        auto_advance: Duration::from_millis(args.interval_ms),
        overlay: Duration::from_millis(args.overlay_ms),
        manual_key: Key::new(&args.key),
    };
    info!(
        "slideshow of {} items ({} slots), advancing every {:?}",
        sequence.content_len(),
        sequence.len(),
        config.auto_advance
    );
    let mut show = SlideshowEngine::new(sequence, config);

    #[cfg(feature = "viewer")]
    if args.window {
        return showreel::viewer::run(show, args.audio.as_deref());
    }

    let run_for = seconds(args.run_for, "run-for")?;
    let mut rt = Runtime::new();
    rt.mount(&mut [&mut show]);
    simulate(&mut rt, &mut [&mut show], args.presses, run_for);

    let view = show.view();
    info!("after {:?}: showing #{} {}", rt.now(), view.current_index, view.current);
    rt.unmount(&mut [&mut show]);
    Ok(())
}

pub fn run_timeline(args: TimelineArgs) -> Result<()> {
    if args.tick_secs == 0 {
        bail!("--tick-secs must be positive");
    }
    let config = CascadeConfig {
        tick_period: Duration::from_secs(args.tick_secs),
        watchdog: (!args.no_watchdog).then(|| Duration::from_secs(args.watchdog_secs)),
        reload_fallback: !args.no_reload_fallback,
    };
    let options = TimelineOptions { source: args.source, ..Default::default() };
    let library = DeckLibrary::new(args.slides, args.api.into());
    let mut cascade = FallbackCascade::new(library, options, config);

    let run_for = seconds(args.run_for, "run-for")?;
    let ready_after = seconds(args.ready_after, "ready-after")?;

    let mut rt = Runtime::new();
    rt.mount(&mut [&mut cascade]);
    if ready_after <= run_for {
        rt.advance(ready_after, &mut [&mut cascade]);
        cascade.library_mut().load();
        rt.emit(READY_SIGNAL, &mut [&mut cascade]);
    }
    rt.advance(run_for.saturating_sub(rt.now()), &mut [&mut cascade]);

    info!(
        "after {:?}: {:?}, slide {:?}, {} reload(s), {} timeline build(s)",
        rt.now(),
        cascade.state(),
        cascade.view().map(|v| v.position()),
        rt.reloads(),
        cascade.library().built()
    );
    rt.unmount(&mut [&mut cascade]);
    Ok(())
}
