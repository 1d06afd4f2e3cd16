//! Input routing
//!
//! Raw platform events are reduced to a small closed set of game actions.
//! Key map:
//! - arrows (key down): steer the snake
//! - A / D (key down): rotate the turret aim
//! - Space (key down): fire
//! - Q (key up) or a window close: quit

use crate::sim::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    A,
    D,
    Space,
    Q,
    /// Any key the game does not bind
    Other(u32),
}

/// A raw event from the platform's event queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub kind: EventKind,
    pub key: Option<KeyCode>,
}

impl InputEvent {
    pub const fn key_down(key: KeyCode) -> Self {
        Self {
            kind: EventKind::KeyDown,
            key: Some(key),
        }
    }

    pub const fn key_up(key: KeyCode) -> Self {
        Self {
            kind: EventKind::KeyUp,
            key: Some(key),
        }
    }

    pub const fn quit() -> Self {
        Self {
            kind: EventKind::Quit,
            key: None,
        }
    }
}

/// Game-level action produced by routing an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Assign the snake's heading
    Steer(Direction),
    /// Rotate the turret aim by this many degrees
    Aim(f32),
    Fire,
    Quit,
}

#[derive(Debug, Clone, Copy)]
pub struct InputRouter {
    aim_sensitivity_deg: f32,
}

impl InputRouter {
    pub fn new(aim_sensitivity_deg: f32) -> Self {
        Self {
            aim_sensitivity_deg,
        }
    }

    /// Map an event to at most one action; unbound events map to nothing
    pub fn route(&self, event: &InputEvent) -> Option<Action> {
        match (event.kind, event.key) {
            (EventKind::Quit, _) => Some(Action::Quit),
            (EventKind::KeyUp, Some(KeyCode::Q)) => Some(Action::Quit),
            (EventKind::KeyDown, Some(key)) => match key {
                KeyCode::Up => Some(Action::Steer(Direction::Up)),
                KeyCode::Down => Some(Action::Steer(Direction::Down)),
                KeyCode::Left => Some(Action::Steer(Direction::Left)),
                KeyCode::Right => Some(Action::Steer(Direction::Right)),
                KeyCode::A => Some(Action::Aim(-self.aim_sensitivity_deg)),
                KeyCode::D => Some(Action::Aim(self.aim_sensitivity_deg)),
                KeyCode::Space => Some(Action::Fire),
                KeyCode::Q | KeyCode::Other(_) => None,
            },
            _ => None,
        }
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(crate::consts::AIM_SENSITIVITY_DEG)
    }
}
