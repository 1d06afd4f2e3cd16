//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::direction::Direction;
use super::grid::{Cell, GridSpace};
use super::projectile::{ProjectileId, ProjectileManager};
use super::snake::{Apple, Snake};
use super::turret::Turret;
use crate::error::ConfigError;
use crate::settings::GameConfig;

/// Complete game state, owned by the frame loop
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub grid: GridSpace,
    pub snake: Snake,
    /// `None` only once the snake covers the whole grid
    pub apple: Option<Apple>,
    pub turret: Turret,
    pub projectiles: ProjectileManager,
    /// Logic ticks fired so far
    pub time_ticks: u64,
    pub apples_eaten: u32,
    pub projectile_speed: f32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Build a fresh game; the seed comes from the config or from entropy
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_seed(config, seed)
    }

    pub fn with_seed(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid()?;
        let mut rng = Pcg32::seed_from_u64(seed);

        let snake = Snake::new(grid.random_cell(&mut rng), Direction::Right);
        let apple = Apple::spawn(&grid, &snake, &mut rng);

        // Turret sits in the bottom-left cell
        let rect = grid.cell_to_rect(Cell::new(0, grid.rows() as i32 - 1));
        let turret = Turret::new(
            Vec2::new(rect.x as f32, rect.y as f32),
            Vec2::splat(grid.cell_size() as f32),
        );

        log::info!(
            "New game: seed={} grid={}x{} snake={} apple={:?}",
            seed,
            grid.columns(),
            grid.rows(),
            snake.head(),
            apple.map(|a| a.cell)
        );

        Ok(Self {
            seed,
            grid,
            snake,
            apple,
            turret,
            projectiles: ProjectileManager::new(grid.arena()),
            time_ticks: 0,
            apples_eaten: 0,
            projectile_speed: config.projectile_speed,
            rng,
        })
    }

    /// Assign the snake's heading (refused reversals are ignored)
    pub fn steer(&mut self, direction: Direction) {
        if !self.snake.steer(direction) {
            log::debug!("Ignored reversal to {:?}", direction);
        }
    }

    pub fn rotate_aim(&mut self, degrees: f32) {
        self.turret.rotate(degrees);
    }

    pub fn fire(&mut self) -> ProjectileId {
        let id = self.turret.fire(&mut self.projectiles, self.projectile_speed);
        log::debug!("Fired {:?} at {:.1} deg", id, self.turret.aim_degrees());
        id
    }

    /// Respawn the apple away from the snake
    pub(crate) fn respawn_apple(&mut self) {
        self.apple = Apple::spawn(&self.grid, &self.snake, &mut self.rng);
    }
}
