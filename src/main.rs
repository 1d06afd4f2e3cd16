//! Snake Arcade entry point
//!
//! Runs the frame loop headless: a scripted demo drives the input and the
//! presenter fingerprints frames instead of drawing them.
//!
//! Usage: `snake-arcade [config.json]`

use std::process::ExitCode;
use std::time::Duration;

use snake_arcade::input::{InputEvent, KeyCode};
use snake_arcade::platform::{HeadlessPresenter, MonotonicClock, ScriptedEvents};
use snake_arcade::{App, GameConfig};

/// Headless run length when the config does not set one
const DEFAULT_RUN_MS: u64 = 5_000;

/// A short tour: steer around a square, sweep the turret and fire a volley
fn demo_script(run_ms: u64) -> ScriptedEvents {
    let mut script = vec![
        (600, InputEvent::key_down(KeyCode::Down)),
        (1_200, InputEvent::key_down(KeyCode::Left)),
        (1_800, InputEvent::key_down(KeyCode::Up)),
        (2_400, InputEvent::key_down(KeyCode::Right)),
    ];
    for i in 0..6 {
        let at = 300 + i * 500;
        script.push((at, InputEvent::key_down(KeyCode::D)));
        script.push((at + 10, InputEvent::key_down(KeyCode::Space)));
    }
    script.push((run_ms, InputEvent::key_up(KeyCode::Q)));
    ScriptedEvents::new(script)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Snake Arcade (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_or_default(&path),
        None => Ok(GameConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let run_ms = config.run_ms.unwrap_or(DEFAULT_RUN_MS);
    let mut app = match App::new(
        &config,
        MonotonicClock::new(),
        demo_script(run_ms),
        HeadlessPresenter::with_pacing(Duration::from_millis(1)),
    ) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Failed to start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    app.run();

    let state = app.state();
    println!(
        "seed {} | {} frames (~{} fps) | {} ticks | {} apples | {} projectiles in flight | frame {:016x}",
        state.seed,
        app.frames(),
        app.fps(),
        state.time_ticks,
        state.apples_eaten,
        state.projectiles.len(),
        app.presenter().last_checksum()
    );
    ExitCode::SUCCESS
}
