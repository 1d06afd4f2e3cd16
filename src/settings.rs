//! Game configuration
//!
//! Loaded from an optional JSON file; every field falls back to the defaults
//! in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::GridSpace;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Grid ===
    pub grid_columns: u32,
    pub grid_rows: u32,
    pub cell_size_px: u32,

    // === Timing ===
    /// Logic tick interval (snake speed)
    pub tick_interval_ms: u64,

    // === Turret ===
    /// Projectile speed in pixels per tick
    pub projectile_speed: f32,
    /// Aim rotation per key press
    pub aim_sensitivity_deg: f32,

    // === Run ===
    /// RNG seed; random when absent
    pub seed: Option<u64>,
    /// Log FPS and entity positions every tick
    pub debug: bool,
    /// Stop the headless run after this many milliseconds
    pub run_ms: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_columns: GRID_COLUMNS,
            grid_rows: GRID_ROWS,
            cell_size_px: CELL_SIZE_PX,
            tick_interval_ms: TICK_INTERVAL_MS,
            projectile_speed: PROJECTILE_SPEED,
            aim_sensitivity_deg: AIM_SENSITIVITY_DEG,
            seed: None,
            debug: false,
            run_ms: None,
        }
    }
}

impl GameConfig {
    /// Reject configurations the frame loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid()?;
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if !(self.projectile_speed.is_finite() && self.projectile_speed > 0.0) {
            return Err(ConfigError::InvalidProjectileSpeed(self.projectile_speed));
        }
        Ok(())
    }

    pub fn grid(&self) -> Result<GridSpace, ConfigError> {
        GridSpace::new(self.grid_columns, self.grid_rows, self.cell_size_px)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Like `load`, but a missing file means defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path.as_ref()) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!(
                    "Config {} not found, using defaults",
                    path.as_ref().display()
                );
                Ok(Self::default())
            }
            other => other,
        }
    }
}
