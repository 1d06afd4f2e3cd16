//! Frame loop
//!
//! Each frame: drain input, fire at most one logic tick, collect layers
//! (projectiles interpolated toward their next position), flatten and present.
//! Rendering always reflects the state after this frame's tick.

use crate::consts::FPS_WINDOW;
use crate::error::ConfigError;
use crate::input::{Action, InputRouter};
use crate::platform::{EventSource, Presenter, TimeSource};
use crate::renderer::{Compositor, Sprites, collect_layers};
use crate::settings::GameConfig;
use crate::sim::{GameState, Millis, SimulationClock, tick};

/// Whether the outer loop should run another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Rolling frame-rate meter over the last `FPS_WINDOW` frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [Millis; FPS_WINDOW],
    frame_index: usize,
    recorded: usize,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0; FPS_WINDOW],
            frame_index: 0,
            recorded: 0,
        }
    }
}

impl FpsCounter {
    pub fn record(&mut self, now: Millis) {
        self.frame_times[self.frame_index] = now;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.recorded = (self.recorded + 1).min(FPS_WINDOW);
    }

    /// Frames per second across the window, 0 until two frames are recorded
    pub fn fps(&self) -> u32 {
        if self.recorded < 2 {
            return 0;
        }
        let newest = self.frame_times[(self.frame_index + FPS_WINDOW - 1) % FPS_WINDOW];
        let oldest = if self.recorded < FPS_WINDOW {
            self.frame_times[0]
        } else {
            self.frame_times[self.frame_index]
        };
        let elapsed = newest.saturating_sub(oldest);
        if elapsed == 0 {
            return 0;
        }
        ((self.recorded - 1) as f64 * 1000.0 / elapsed as f64).round() as u32
    }
}

/// Game instance holding all state and its platform collaborators
pub struct App<T, E, P> {
    state: GameState,
    clock: SimulationClock,
    router: InputRouter,
    sprites: Sprites,
    compositor: Compositor,
    time: T,
    events: E,
    presenter: P,
    fps: FpsCounter,
    frames: u64,
    debug: bool,
}

impl<T: TimeSource, E: EventSource, P: Presenter> App<T, E, P> {
    /// Validate the config and build the game; the first tick is due immediately
    pub fn new(config: &GameConfig, time: T, events: E, presenter: P) -> Result<Self, ConfigError> {
        let state = GameState::new(config)?;
        Self::with_state(config, state, time, events, presenter)
    }

    pub fn with_state(
        config: &GameConfig,
        state: GameState,
        time: T,
        events: E,
        presenter: P,
    ) -> Result<Self, ConfigError> {
        let clock = SimulationClock::new(time.now_ms(), config.tick_interval_ms)?;
        let (width, height) = state.grid.resolution();

        Ok(Self {
            sprites: Sprites::new(&state.grid),
            compositor: Compositor::new(width, height),
            router: InputRouter::new(config.aim_sensitivity_deg),
            state,
            clock,
            time,
            events,
            presenter,
            fps: FpsCounter::default(),
            frames: 0,
            debug: config.debug,
        })
    }

    /// Run one frame
    pub fn frame(&mut self) -> LoopControl {
        let now = self.time.now_ms();
        let mut control = LoopControl::Continue;

        for event in self.events.poll_events(now) {
            match self.router.route(&event) {
                Some(Action::Steer(direction)) => self.state.steer(direction),
                Some(Action::Aim(degrees)) => self.state.rotate_aim(degrees),
                Some(Action::Fire) => {
                    self.state.fire();
                }
                Some(Action::Quit) => control = LoopControl::Exit,
                None => {}
            }
        }

        if self.clock.poll(now) {
            tick(&mut self.state);
            if self.debug {
                log::info!(
                    "FPS: {} | {} | {}",
                    self.fps.fps(),
                    self.state.snake,
                    self.state
                        .apple
                        .map_or_else(|| "no apple".to_string(), |a| a.to_string())
                );
            }
        }

        let fraction = self.clock.interpolation(now);
        let layers = collect_layers(&self.state, &self.sprites, fraction);
        let frame = self.compositor.flatten(&layers);
        self.presenter.present(frame);

        self.fps.record(self.time.now_ms());
        self.frames += 1;
        control
    }

    /// Run frames until a quit action arrives
    pub fn run(&mut self) {
        log::info!("Entering frame loop");
        while self.frame() == LoopControl::Continue {}
        log::info!(
            "Frame loop exited after {} frames, {} ticks, {} apples",
            self.frames,
            self.state.time_ticks,
            self.state.apples_eaten
        );
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn time_mut(&mut self) -> &mut T {
        &mut self.time
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }
}
