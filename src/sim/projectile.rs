//! Free-moving projectiles with per-tick vector integration
//!
//! Positions are in screen pixels. A projectile advances by `speed * direction`
//! once per logic tick and is removed as soon as it leaves the arena.

use glam::Vec2;

use crate::consts::PROJECTILE_RADIUS;

/// Pixel rectangle bounding continuous-space entities
///
/// Containment is inclusive on the min edge and exclusive on the max edge,
/// matching how the grid maps cells to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub min: Vec2,
    pub max: Vec2,
}

impl Arena {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Arena anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Lifecycle of a projectile; `Removed` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileState {
    Moving,
    Removed,
}

/// Stable handle into a `ProjectileManager`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectileId(pub u32);

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: ProjectileId,
    pub pos: Vec2,
    /// Unit heading
    pub dir: Vec2,
    /// Pixels per tick
    pub speed: f32,
    pub radius: f32,
    pub state: ProjectileState,
}

impl Projectile {
    pub fn new(id: ProjectileId, pos: Vec2, direction: Vec2, speed: f32) -> Self {
        Self {
            id,
            pos,
            dir: direction.normalize_or_zero(),
            speed,
            radius: PROJECTILE_RADIUS,
            state: ProjectileState::Moving,
        }
    }

    /// Velocity vector (displacement per tick)
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.dir * self.speed
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state == ProjectileState::Moving
    }

    /// Integrate one tick, then test the arena bounds
    pub fn step(&mut self, arena: &Arena) -> ProjectileState {
        if !self.is_alive() {
            return self.state;
        }

        self.pos += self.velocity();

        if !arena.contains(self.pos) {
            self.state = ProjectileState::Removed;
        }

        // TODO: collide with the snake and apple once hits have a gameplay effect
        self.state
    }

    /// Render position between this tick and the predicted next one
    ///
    /// `fraction` 0 is the current position, 1 is one full velocity step ahead.
    pub fn render_position(&self, fraction: f32) -> Vec2 {
        let next = self.pos + self.velocity();
        self.pos.lerp(next, fraction.clamp(0.0, 1.0))
    }
}

/// Owns all live projectiles, in spawn order
#[derive(Debug, Clone)]
pub struct ProjectileManager {
    arena: Arena,
    projectiles: Vec<Projectile>,
    next_id: u32,
}

impl ProjectileManager {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            projectiles: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a projectile and return its handle
    pub fn spawn(&mut self, pos: Vec2, direction: Vec2, speed: f32) -> ProjectileId {
        let id = ProjectileId(self.next_id);
        self.next_id += 1;
        self.projectiles
            .push(Projectile::new(id, pos, direction, speed));
        id
    }

    /// Step every live projectile once, then purge the ones that left the arena
    ///
    /// Returns the handles removed this tick.
    pub fn step_all(&mut self) -> Vec<ProjectileId> {
        let arena = self.arena;
        let removed: Vec<ProjectileId> = self
            .projectiles
            .iter_mut()
            .filter_map(|p| (p.step(&arena) == ProjectileState::Removed).then_some(p.id))
            .collect();

        if !removed.is_empty() {
            self.projectiles.retain(Projectile::is_alive);
        }
        removed
    }

    pub fn get(&self, id: ProjectileId) -> Option<&Projectile> {
        self.projectiles.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }
}
