//! Turret with a continuously rotating aim

use glam::Vec2;

use super::projectile::{ProjectileId, ProjectileManager};
use crate::consts::{INITIAL_AIM_DEG, TURRET_AIM_RATE};
use crate::{heading_from_degrees, rotate_degrees};

#[derive(Debug, Clone)]
pub struct Turret {
    /// Top-left corner of the turret block, in pixels
    pub pos: Vec2,
    /// Block size in pixels
    pub block: Vec2,
    /// Aim vector relative to the block center
    pub aim: Vec2,
}

impl Turret {
    pub fn new(pos: Vec2, block: Vec2) -> Self {
        Self {
            pos,
            block,
            aim: heading_from_degrees(INITIAL_AIM_DEG) * block.length() * TURRET_AIM_RATE,
        }
    }

    /// Center of the turret block, relative to its top-left corner
    #[inline]
    pub fn local_center(&self) -> Vec2 {
        self.block / 2.0
    }

    /// Center of the turret in screen pixels
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.local_center()
    }

    /// Rotate the aim; positive degrees turn clockwise on screen
    pub fn rotate(&mut self, degrees: f32) {
        self.aim = rotate_degrees(self.aim, degrees);
    }

    /// Aim angle in degrees, in (-180, 180]
    pub fn aim_degrees(&self) -> f32 {
        self.aim.y.atan2(self.aim.x).to_degrees()
    }

    /// Launch a projectile from the center along the aim
    pub fn fire(&self, projectiles: &mut ProjectileManager, speed: f32) -> ProjectileId {
        projectiles.spawn(self.center(), self.aim, speed)
    }
}
