//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick rate, driven by `SimulationClock`
//! - Seeded RNG only
//! - Stable iteration order (projectiles by handle)
//! - No rendering or platform dependencies

pub mod clock;
pub mod direction;
pub mod grid;
pub mod projectile;
pub mod snake;
pub mod state;
pub mod tick;
pub mod turret;

pub use clock::{Millis, SimulationClock};
pub use direction::{Direction, advance};
pub use grid::{Cell, GridSpace, PixelRect, collides, random_cell};
pub use projectile::{Arena, Projectile, ProjectileId, ProjectileManager, ProjectileState};
pub use snake::{Apple, Snake, SnakeMove};
pub use state::GameState;
pub use tick::{TickEvents, tick};
pub use turret::Turret;
