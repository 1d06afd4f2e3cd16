//! Snake Arcade - a grid snake and an experimental turret on one screen
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, clock, projectile physics, game state)
//! - `renderer`: Software layers and the flattening pass
//! - `input`: Raw event routing
//! - `platform`: Time, input and presentation seams
//! - `app`: Frame loop tying everything together

pub mod app;
pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, LoopControl};
pub use error::ConfigError;
pub use settings::GameConfig;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Grid dimensions (columns, rows)
    pub const GRID_COLUMNS: u32 = 20;
    pub const GRID_ROWS: u32 = 20;
    /// Cell edge in pixels
    pub const CELL_SIZE_PX: u32 = 30;

    /// Time between logic ticks (basically the snake speed)
    pub const TICK_INTERVAL_MS: u64 = 250;

    /// Turret aim
    pub const INITIAL_AIM_DEG: f32 = -45.0;
    pub const AIM_SENSITIVITY_DEG: f32 = 10.0;
    /// Turret base radius relative to the cell diagonal
    pub const TURRET_CIRCLE_RATE: f32 = 1.0 / 6.0;
    /// Aim line length relative to the cell diagonal
    pub const TURRET_AIM_RATE: f32 = 1.0 / 3.4;
    pub const TURRET_AIM_WIDTH: f32 = 10.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Pixels travelled per logic tick
    pub const PROJECTILE_SPEED: f32 = 12.0;

    /// Frames kept by the FPS meter
    pub const FPS_WINDOW: usize = 60;
}

/// Unit vector for an angle given in degrees (screen space, y down)
#[inline]
pub fn heading_from_degrees(degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians())
}

/// Rotate a vector by an angle given in degrees
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}
