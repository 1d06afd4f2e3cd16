//! Layer collection and the per-frame flattening pass
//!
//! Layers are blitted in order, so later layers occlude earlier ones. The
//! z-order is fixed: apple, snake from tail to head, turret, then projectiles
//! by ascending handle.

use std::borrow::Cow;

use glam::{IVec2, Vec2};

use super::image::{Image, Rgba, colors};
use super::shapes;
use crate::consts::{PROJECTILE_RADIUS, TURRET_AIM_WIDTH, TURRET_CIRCLE_RATE};
use crate::sim::{GameState, GridSpace, Turret};

/// An image and the screen position of its top-left corner
#[derive(Debug, Clone)]
pub struct Layer<'a> {
    pub image: Cow<'a, Image>,
    pub pos: IVec2,
}

/// Static per-kind images, built once for a grid
#[derive(Debug, Clone)]
pub struct Sprites {
    pub snake_head: Image,
    pub snake_body: Image,
    pub apple: Image,
    pub projectile: Image,
}

impl Sprites {
    pub fn new(grid: &GridSpace) -> Self {
        let step = grid.cell_size();
        let diameter = (PROJECTILE_RADIUS * 2.0).ceil() as u32;
        let mut projectile = Image::new(diameter, diameter);
        shapes::circle(
            &mut projectile,
            Vec2::splat(PROJECTILE_RADIUS),
            PROJECTILE_RADIUS,
            colors::PROJECTILE,
        );

        Self {
            snake_head: Image::filled(step, step, colors::SNAKE_HEAD),
            snake_body: Image::filled(step, step, colors::SNAKE_BODY),
            apple: Image::filled(step, step, colors::APPLE),
            projectile,
        }
    }
}

/// Turret image: round base plus the aim line; redrawn since the aim rotates
pub fn turret_image(turret: &Turret) -> Image {
    let mut image = Image::new(turret.block.x as u32, turret.block.y as u32);
    let center = turret.local_center();
    shapes::circle(
        &mut image,
        center,
        turret.block.length() * TURRET_CIRCLE_RATE,
        colors::TURRET,
    );
    shapes::line(
        &mut image,
        center,
        center + turret.aim,
        TURRET_AIM_WIDTH,
        colors::TURRET,
    );
    image
}

/// Collect this frame's layers without touching game state
///
/// Projectiles are drawn at their interpolated position for `fraction`.
pub fn collect_layers<'a>(state: &GameState, sprites: &'a Sprites, fraction: f32) -> Vec<Layer<'a>> {
    let grid = &state.grid;
    let mut layers = Vec::with_capacity(state.snake.len() + state.projectiles.len() + 2);

    if let Some(apple) = state.apple {
        layers.push(Layer {
            image: Cow::Borrowed(&sprites.apple),
            pos: grid.cell_to_rect(apple.cell).origin(),
        });
    }

    for (i, &cell) in state.snake.segments().iter().enumerate().rev() {
        let image = if i == 0 {
            &sprites.snake_head
        } else {
            &sprites.snake_body
        };
        layers.push(Layer {
            image: Cow::Borrowed(image),
            pos: grid.cell_to_rect(cell).origin(),
        });
    }

    layers.push(Layer {
        image: Cow::Owned(turret_image(&state.turret)),
        pos: state.turret.pos.round().as_ivec2(),
    });

    for p in state.projectiles.iter().filter(|p| p.is_alive()) {
        let top_left = p.render_position(fraction) - p.radius;
        layers.push(Layer {
            image: Cow::Borrowed(&sprites.projectile),
            pos: top_left.round().as_ivec2(),
        });
    }

    layers
}

/// Flattens layers into one frame
#[derive(Debug, Clone)]
pub struct Compositor {
    frame: Image,
    background: Rgba,
}

impl Compositor {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            frame: Image::filled(width, height, colors::BACKGROUND),
            background: colors::BACKGROUND,
        }
    }

    /// Clear to the background and blit every layer in order
    pub fn flatten(&mut self, layers: &[Layer<'_>]) -> &Image {
        self.frame.fill(self.background);
        for layer in layers {
            self.frame.blit(&layer.image, layer.pos);
        }
        &self.frame
    }

    pub fn frame(&self) -> &Image {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::{Apple, Cell, Direction, Snake, tick};

    fn state() -> GameState {
        let mut state = GameState::with_seed(&GameConfig::default(), 5).unwrap();
        state.snake = Snake::new(Cell::new(5, 5), Direction::Right);
        state.apple = Some(Apple {
            cell: Cell::new(10, 10),
        });
        state
    }

    #[test]
    fn test_layer_order() {
        let mut state = state();
        state.apple = Some(Apple {
            cell: Cell::new(6, 5),
        });
        tick(&mut state); // grow onto the apple
        state.apple = Some(Apple {
            cell: Cell::new(10, 10),
        });
        let first = state.fire();
        let second = state.fire();
        let sprites = Sprites::new(&state.grid);

        let layers = collect_layers(&state, &sprites, 0.0);
        // apple, body, head, turret, two projectiles
        assert_eq!(layers.len(), 6);
        assert_eq!(layers[0].pos, IVec2::new(300, 300));
        assert_eq!(layers[1].pos, IVec2::new(150, 150));
        assert_eq!(layers[2].pos, IVec2::new(180, 150));
        assert_eq!(*layers[2].image, sprites.snake_head);
        assert_eq!(layers[3].pos, IVec2::new(0, 570));

        let p1 = state.projectiles.get(first).unwrap();
        let p2 = state.projectiles.get(second).unwrap();
        assert_eq!(layers[4].pos, (p1.pos - p1.radius).round().as_ivec2());
        assert_eq!(layers[5].pos, (p2.pos - p2.radius).round().as_ivec2());
    }

    #[test]
    fn test_projectile_interpolated() {
        let mut state = state();
        state.projectiles.spawn(Vec2::new(100.0, 100.0), Vec2::X, 10.0);
        let sprites = Sprites::new(&state.grid);

        let at = |fraction| collect_layers(&state, &sprites, fraction).last().unwrap().pos;
        assert_eq!(at(0.0), IVec2::new(95, 95));
        assert_eq!(at(0.5), IVec2::new(100, 95));
        assert_eq!(at(1.0), IVec2::new(105, 95));
    }

    #[test]
    fn test_flatten_occlusion() {
        let state = state();
        let sprites = Sprites::new(&state.grid);
        let (w, h) = state.grid.resolution();
        let mut compositor = Compositor::new(w, h);

        // Apple and head on the same cell: the head is drawn last
        let layers = vec![
            Layer {
                image: Cow::Borrowed(&sprites.apple),
                pos: IVec2::new(30, 30),
            },
            Layer {
                image: Cow::Borrowed(&sprites.snake_head),
                pos: IVec2::new(30, 30),
            },
        ];
        let frame = compositor.flatten(&layers);
        assert_eq!(frame.pixel(45, 45), Some(colors::SNAKE_HEAD));
        assert_eq!(frame.pixel(0, 0), Some(colors::BACKGROUND));
    }

    #[test]
    fn test_flatten_clears_previous_frame() {
        let state = state();
        let sprites = Sprites::new(&state.grid);
        let mut compositor = Compositor::new(60, 60);
        let layers = vec![Layer {
            image: Cow::Borrowed(&sprites.apple),
            pos: IVec2::ZERO,
        }];
        compositor.flatten(&layers);
        let frame = compositor.flatten(&[]);
        assert_eq!(frame.pixel(0, 0), Some(colors::BACKGROUND));
    }

    #[test]
    fn test_turret_image_has_aim_line() {
        let state = state();
        let image = turret_image(&state.turret);
        assert_eq!(image.width(), 30);
        // Base circle at the center
        assert_eq!(image.pixel(15, 15), Some(colors::TURRET));
        // Aim points up-right, so the line reaches the upper-right quadrant
        let tip = state.turret.local_center() + state.turret.aim * 0.9;
        assert_eq!(image.pixel(tip.x as i32, tip.y as i32), Some(colors::TURRET));
        assert_eq!(image.pixel(1, 28), Some(Rgba::TRANSPARENT));
    }
}
