//! Setup-time errors
//!
//! Everything inside the frame loop is total; only configuration can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must have at least one column and one row (got {columns}x{rows})")]
    EmptyGrid { columns: u32, rows: u32 },
    #[error("cell size must be at least 1px")]
    ZeroCellSize,
    #[error("grid of {columns}x{rows} cells at {cell_size_px}px does not fit in i32 pixel coordinates")]
    GridTooLarge {
        columns: u32,
        rows: u32,
        cell_size_px: u32,
    },
    #[error("tick interval must be at least 1ms")]
    ZeroTickInterval,
    #[error("projectile speed must be positive and finite (got {0})")]
    InvalidProjectileSpeed(f32),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
