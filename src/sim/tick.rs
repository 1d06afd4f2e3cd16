//! One fixed logic tick
//!
//! Discrete and continuous entities both advance exactly once per tick. The
//! clock decides when a tick is due; this module only mutates state.

use super::grid::collides;
use super::projectile::ProjectileId;
use super::snake::SnakeMove;
use super::state::GameState;

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub ate_apple: bool,
    pub bit_itself: bool,
    /// Projectiles that left the arena and were purged
    pub removed: Vec<ProjectileId>,
}

/// Advance the game state by one logic tick
pub fn tick(state: &mut GameState) -> TickEvents {
    let mut events = TickEvents::default();

    // Snake
    let next = state.snake.next_head(&state.grid);
    let eating = state.apple.is_some_and(|a| collides(a.cell, next));

    match state.snake.step(&state.grid, eating) {
        SnakeMove::Grew => {
            events.ate_apple = true;
            state.apples_eaten += 1;
            state.respawn_apple();
            log::debug!(
                "Apple eaten at {}, length {}",
                next,
                state.snake.len()
            );
        }
        SnakeMove::BitItself => {
            events.bit_itself = true;
            log::debug!("Snake bit itself at {}, reset to {}", next, state.snake.head());
            if state.apple.is_some_and(|a| state.snake.occupies(a.cell)) {
                state.respawn_apple();
            }
        }
        SnakeMove::Moved => {}
    }

    // Projectiles
    events.removed = state.projectiles.step_all();
    for id in &events.removed {
        log::debug!("Projectile {:?} left the arena", id);
    }

    state.time_ticks += 1;
    events
}
