//! Grid space shared by discrete entities
//!
//! A cell `(x, y)` covers the pixel square starting at `(x * step, y * step)`.
//! Cells are plain values: moving an entity means replacing its cell.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::projectile::Arena;
use crate::error::ConfigError;

/// A point in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Exact-match collision between two cells
#[inline]
pub fn collides(a: Cell, b: Cell) -> bool {
    a.x == b.x && a.y == b.y
}

/// Uniformly random cell in `[0, columns) x [0, rows)`
///
/// Both dimensions must be non-zero; `GridSpace::new` guarantees it.
pub fn random_cell<R: Rng>(columns: u32, rows: u32, rng: &mut R) -> Cell {
    Cell {
        x: rng.random_range(0..columns) as i32,
        y: rng.random_range(0..rows) as i32,
    }
}

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }
}

/// Grid configuration: dimensions in cells and the cell edge in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpace {
    columns: u32,
    rows: u32,
    step: u32,
}

impl GridSpace {
    pub fn new(columns: u32, rows: u32, cell_size_px: u32) -> Result<Self, ConfigError> {
        if columns == 0 || rows == 0 {
            return Err(ConfigError::EmptyGrid { columns, rows });
        }
        if cell_size_px == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        // Every pixel coordinate on the grid must be representable as i32
        let fits = |cells: u32| {
            cells
                .checked_mul(cell_size_px)
                .is_some_and(|px| i32::try_from(px).is_ok())
        };
        if !fits(columns) || !fits(rows) {
            return Err(ConfigError::GridTooLarge {
                columns,
                rows,
                cell_size_px,
            });
        }
        Ok(Self {
            columns,
            rows,
            step: cell_size_px,
        })
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.step
    }

    /// Total resolution in pixels (width, height)
    pub fn resolution(&self) -> (u32, u32) {
        (self.columns * self.step, self.rows * self.step)
    }

    /// Number of cells on the grid
    pub fn cell_count(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }

    /// Pixel arena covering the whole grid
    pub fn arena(&self) -> Arena {
        let (w, h) = self.resolution();
        Arena::from_size(w as f32, h as f32)
    }

    /// Pixel rectangle covered by a cell
    pub fn cell_to_rect(&self, cell: Cell) -> PixelRect {
        let step = self.step as i32;
        PixelRect::new(cell.x * step, cell.y * step, self.step, self.step)
    }

    /// Cell containing a pixel, if the pixel is on the grid
    pub fn cell_at(&self, pixel: IVec2) -> Option<Cell> {
        let (w, h) = self.resolution();
        if pixel.x < 0 || pixel.y < 0 || pixel.x >= w as i32 || pixel.y >= h as i32 {
            return None;
        }
        let step = self.step as i32;
        Some(Cell::new(pixel.x / step, pixel.y / step))
    }

    /// Check if a cell is within the grid bounds
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.columns as i32 && cell.y >= 0 && cell.y < self.rows as i32
    }

    /// Wrap a cell around the grid edges (toroidal)
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(
            cell.x.rem_euclid(self.columns as i32),
            cell.y.rem_euclid(self.rows as i32),
        )
    }

    /// Random in-bounds cell drawn from the given source
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Cell {
        random_cell(self.columns, self.rows, rng)
    }
}
