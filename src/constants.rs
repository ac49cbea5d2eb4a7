use std::time::Duration;

pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_secs(30); // Automatic advance countdown
pub const OVERLAY_DURATION: Duration = Duration::from_millis(700); // Outgoing slide stays rendered this long
pub const MANUAL_ADVANCE_KEY: &str = "m";
pub const DEFAULT_BUFFER_ITEM: &str = "/posters/fabric-8.png";

pub const CASCADE_TICK_PERIOD: Duration = Duration::from_secs(10); // Kiosk timeline variant
pub const RELAXED_TICK_PERIOD: Duration = Duration::from_secs(20); // Timeline variant without watchdog
pub const WATCHDOG_DURATION: Duration = Duration::from_secs(110); // 11 slides x 10 s

pub const READY_SIGNAL: &str = "tl:ready";
pub const TIMELINE_SOURCE: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTloQ5EgjW5WsRsrHL-MgmsQrDU6cTgbSefRul3nrp76N1TFCDJvSsXZ5_C1jVCtSzQVGWUzHgDnSJJ/pubhtml";
pub const TIMELINE_INITIAL_ZOOM: u8 = 2;
pub const NEXT_CONTROL_SELECTORS: &[&str] = &[".tl-slidenav-next"];
pub const RESTART_CONTROL_SELECTORS: &[&str] = &[".tl-slidenav-home", ".tl-back-home"];

pub const AUDIO_RESTART_KEY: &str = "r";
pub const AUDIO_PAUSE_KEY: &str = "p";
pub const AUDIO_RESUME_KEY: &str = "c";

pub const MIN_INTERVAL_PERIOD: Duration = Duration::from_millis(1);

pub const RENDER_WIDTH: i32 = 1920; // Width of the viewer window at full size
pub const RENDER_HEIGHT: i32 = 1080; // Height of the viewer window at full size
pub const FPS: u32 = 60; // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)
