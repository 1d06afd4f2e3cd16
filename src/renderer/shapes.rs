//! Rasterization of 2D primitives
//!
//! A pixel is covered when its center lies inside the shape.

use glam::Vec2;

use super::image::{Image, Rgba};

#[inline]
fn pixel_center(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Fill a circle
pub fn circle(image: &mut Image, center: Vec2, radius: f32, color: Rgba) {
    let min = (center - radius).floor();
    let max = (center + radius).ceil();
    let r2 = radius * radius;

    for py in min.y as i32..max.y as i32 {
        for px in min.x as i32..max.x as i32 {
            if pixel_center(px, py).distance_squared(center) <= r2 {
                image.set_pixel(px, py, color);
            }
        }
    }
}

/// Draw a line segment of the given width
pub fn line(image: &mut Image, start: Vec2, end: Vec2, width: f32, color: Rgba) {
    let half = width / 2.0;
    let min = (start.min(end) - half).floor();
    let max = (start.max(end) + half).ceil();

    let seg = end - start;
    let len2 = seg.length_squared();

    for py in min.y as i32..max.y as i32 {
        for px in min.x as i32..max.x as i32 {
            let p = pixel_center(px, py);
            // Closest point on the segment
            let t = if len2 > 0.0 {
                ((p - start).dot(seg) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            if p.distance(start + seg * t) <= half {
                image.set_pixel(px, py, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: Rgba = Rgba::rgb(9, 9, 9);

    fn count(img: &Image) -> usize {
        let mut n = 0;
        for y in 0..img.height() as i32 {
            for x in 0..img.width() as i32 {
                if img.pixel(x, y) == Some(C) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_circle() {
        let mut img = Image::new(10, 10);
        circle(&mut img, Vec2::splat(5.0), 5.0, C);
        assert_eq!(img.pixel(5, 5), Some(C));
        assert_eq!(img.pixel(0, 0), Some(Rgba::TRANSPARENT));
        // Roughly pi * r^2
        let n = count(&img) as f32;
        assert!((n - 78.5).abs() < 8.0);
    }

    #[test]
    fn test_line() {
        let mut img = Image::new(20, 5);
        line(&mut img, Vec2::new(0.0, 2.5), Vec2::new(20.0, 2.5), 1.0, C);
        for x in 0..20 {
            assert_eq!(img.pixel(x, 2), Some(C));
            assert_eq!(img.pixel(x, 0), Some(Rgba::TRANSPARENT));
        }
    }

    #[test]
    fn test_degenerate_line_is_a_dot() {
        let mut img = Image::new(10, 10);
        line(&mut img, Vec2::splat(5.0), Vec2::splat(5.0), 4.0, C);
        assert_eq!(img.pixel(5, 5), Some(C));
        assert_eq!(img.pixel(9, 9), Some(Rgba::TRANSPARENT));
    }
}
