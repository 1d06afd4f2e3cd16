//! Software RGBA images

use bytemuck::{Pod, Zeroable};
use glam::IVec2;

/// One RGBA pixel; alpha 0 is treated as transparent when blitting
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }
}

/// Colors for game elements
pub mod colors {
    use super::Rgba;

    pub const BACKGROUND: Rgba = Rgba::rgb(0x00, 0x00, 0x00);
    pub const SNAKE_HEAD: Rgba = Rgba::rgb(0x00, 0xFF, 0x00);
    pub const SNAKE_BODY: Rgba = Rgba::rgb(0x00, 0xB0, 0x00);
    pub const APPLE: Rgba = Rgba::rgb(0xFF, 0x00, 0x80);
    pub const TURRET: Rgba = Rgba::rgb(0xFF, 0x00, 0x00);
    pub const PROJECTILE: Rgba = Rgba::rgb(0xFF, 0xFF, 0x00);
}

/// A presentable surface: a row-major pixel buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Image {
    /// Fully transparent image
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write a pixel; out-of-bounds writes are clipped
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Copy `src` with its top-left at `pos`, skipping transparent pixels
    pub fn blit(&mut self, src: &Image, pos: IVec2) {
        // Clip the source rectangle against this image
        let x0 = (-pos.x).max(0);
        let y0 = (-pos.y).max(0);
        let x1 = (self.width as i32 - pos.x).min(src.width as i32);
        let y1 = (self.height as i32 - pos.y).min(src.height as i32);

        for sy in y0..y1 {
            for sx in x0..x1 {
                let color = src.pixels[sy as usize * src.width as usize + sx as usize];
                if color.a != 0 {
                    self.set_pixel(pos.x + sx, pos.y + sy, color);
                }
            }
        }
    }

    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::rgb(0xFF, 0, 0);

    #[test]
    fn test_pixel_access() {
        let mut img = Image::new(4, 3);
        img.set_pixel(3, 2, RED);
        assert_eq!(img.pixel(3, 2), Some(RED));
        assert_eq!(img.pixel(4, 0), None);
        // Clipped write is a no-op
        img.set_pixel(-1, 0, RED);
        assert_eq!(img.pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_blit_clips_and_skips_transparent() {
        let mut dst = Image::filled(4, 4, colors::BACKGROUND);
        let mut src = Image::new(2, 2);
        src.set_pixel(0, 0, RED);
        src.set_pixel(1, 1, RED);

        dst.blit(&src, IVec2::new(3, 3));
        assert_eq!(dst.pixel(3, 3), Some(RED));

        dst.blit(&src, IVec2::new(-1, -1));
        assert_eq!(dst.pixel(0, 0), Some(RED));
        // Outside the clipped source rect the background stays
        assert_eq!(dst.pixel(1, 0), Some(colors::BACKGROUND));
    }

    #[test]
    fn test_blit_fully_outside() {
        let mut dst = Image::filled(2, 2, colors::BACKGROUND);
        let src = Image::filled(2, 2, RED);
        dst.blit(&src, IVec2::new(10, 10));
        dst.blit(&src, IVec2::new(-5, 0));
        assert!(dst.as_bytes().chunks(4).all(|px| px == [0, 0, 0, 0xFF]));
    }

    #[test]
    fn test_as_bytes_layout() {
        let img = Image::filled(2, 1, Rgba::new(1, 2, 3, 4));
        assert_eq!(img.as_bytes(), &[1, 2, 3, 4, 1, 2, 3, 4]);
    }
}
