//! Platform abstraction layer
//!
//! Seams to the display side of the game:
//! - Time (monotonic milliseconds)
//! - Input events
//! - Frame presentation
//!
//! Headless and scripted implementations live here too; a windowed backend
//! only needs to implement the three traits.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::input::InputEvent;
use crate::renderer::Image;
use crate::sim::Millis;

/// Monotonic time source
pub trait TimeSource {
    fn now_ms(&self) -> Millis;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    fn now_ms(&self) -> Millis {
        self.start.elapsed().as_millis() as Millis
    }
}

/// Hand-driven clock for tests and replays
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Millis,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self { now: start }
    }

    pub fn set(&mut self, now: Millis) {
        self.now = now;
    }

    pub fn advance(&mut self, ms: Millis) {
        self.now += ms;
    }
}

impl TimeSource for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now
    }
}

/// Source of raw input events
pub trait EventSource {
    /// Drain every event pending at `now`
    fn poll_events(&mut self, now: Millis) -> Vec<InputEvent>;
}

/// Events released at fixed times
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    script: VecDeque<(Millis, InputEvent)>,
}

impl ScriptedEvents {
    /// Entries are sorted by time; equal times keep their given order
    pub fn new(mut script: Vec<(Millis, InputEvent)>) -> Self {
        script.sort_by_key(|(at, _)| *at);
        Self {
            script: script.into(),
        }
    }

    pub fn push(&mut self, at: Millis, event: InputEvent) {
        let idx = self.script.partition_point(|(t, _)| *t <= at);
        self.script.insert(idx, (at, event));
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_events(&mut self, now: Millis) -> Vec<InputEvent> {
        let due = self.script.partition_point(|(t, _)| *t <= now);
        self.script.drain(..due).map(|(_, e)| e).collect()
    }
}

/// Receives finished frames
pub trait Presenter {
    fn present(&mut self, frame: &Image);
}

/// Presenter without a display: counts frames and fingerprints the last one
#[derive(Debug, Clone, Default)]
pub struct HeadlessPresenter {
    frames: u64,
    last_checksum: u64,
    pacing: Option<Duration>,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep after each frame, standing in for vsync
    pub fn with_pacing(pacing: Duration) -> Self {
        Self {
            pacing: Some(pacing),
            ..Self::default()
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_checksum(&self) -> u64 {
        self.last_checksum
    }
}

/// FNV-1a over the frame bytes
fn checksum(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |h, &b| {
        (h ^ b as u64).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

impl Presenter for HeadlessPresenter {
    fn present(&mut self, frame: &Image) {
        self.frames += 1;
        self.last_checksum = checksum(frame.as_bytes());
        if let Some(pacing) = self.pacing {
            std::thread::sleep(pacing);
        }
    }
}
