//! Software rendering module
//!
//! Entities become (image, position) layers; the compositor flattens them into
//! one frame that the platform presenter displays.

pub mod compositor;
pub mod image;
pub mod shapes;

pub use compositor::{Compositor, Layer, Sprites, collect_layers, turret_image};
pub use image::{Image, Rgba, colors};
