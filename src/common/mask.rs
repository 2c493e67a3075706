//! Pixel collision masks.
//!
//! A mask is built once from the unrotated sprite. Rotation is handled at test
//! time: each sample point is mapped back into the sprite's local frame, so a
//! spinning meteor collides with its true silhouette without rebuilding bits.

use bevy::color::Alpha;
use bevy::prelude::*;

/// A pixel counts as solid when its alpha is strictly above this (0..=255).
pub const ALPHA_THRESHOLD: u8 = 127;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

/// Where a mask sits in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub center: Vec2,
    /// Counter-clockwise on screen, in degrees.
    pub angle_deg: f32,
}

impl Placement {
    #[inline]
    pub fn upright(center: Vec2) -> Self {
        Self { center, angle_deg: 0.0 }
    }
}

impl CollisionMask {
    /// Build from row-major alpha values.
    pub fn from_alpha(width: u32, height: u32, alpha: impl IntoIterator<Item = u8>) -> Self {
        let mut bits: Vec<bool> = alpha.into_iter().map(|a| a > ALPHA_THRESHOLD).collect();
        bits.resize((width * height) as usize, false);
        Self { width, height, bits }
    }

    pub fn solid(width: u32, height: u32) -> Self {
        Self { width, height, bits: vec![true; (width * height) as usize] }
    }

    /// Read alpha out of a CPU-side image. `None` if the pixels are not accessible.
    pub fn from_image(image: &Image) -> Option<Self> {
        let (w, h) = (image.width(), image.height());
        let mut alpha = Vec::with_capacity((w * h) as usize);
        for y in 0..h {
            for x in 0..w {
                let a = image.get_color_at(x, y).ok()?.alpha();
                alpha.push((a.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
        }
        Some(Self::from_alpha(w, h, alpha))
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[(y as u32 * self.width + x as u32) as usize]
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// Is the screen point `p` on a solid pixel of this mask placed at `at`?
    fn sample(&self, at: Placement, p: Vec2) -> bool {
        let d = p - at.center;
        let local = if at.angle_deg == 0.0 {
            d
        } else {
            let (s, c) = at.angle_deg.to_radians().sin_cos();
            Vec2::new(d.x * c - d.y * s, d.x * s + d.y * c)
        };
        let px = local + self.size() * 0.5;
        self.get(px.x.floor() as i32, px.y.floor() as i32)
    }

    /// Axis-aligned screen bounds of this mask at `at`.
    pub fn bounds(&self, at: Placement) -> Rect {
        Rect::from_center_size(at.center, rotated_size(self.size(), at.angle_deg))
    }
}

/// Size of the axis-aligned box enclosing a `size` rectangle rotated by `angle_deg`.
#[inline]
pub fn rotated_size(size: Vec2, angle_deg: f32) -> Vec2 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    let (s, c) = (s.abs(), c.abs());
    Vec2::new(size.x * c + size.y * s, size.x * s + size.y * c)
}

/// Per-pixel overlap of two placed masks.
pub fn masks_overlap(a: &CollisionMask, at_a: Placement, b: &CollisionMask, at_b: Placement) -> bool {
    let area = a.bounds(at_a).intersect(b.bounds(at_b));
    if area.is_empty() {
        return false;
    }

    let (x0, x1) = (area.min.x.floor() as i32, area.max.x.ceil() as i32);
    let (y0, y1) = (area.min.y.floor() as i32, area.max.y.ceil() as i32);

    (y0..y1).any(|y| {
        (x0..x1).any(|x| {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            a.sample(at_a, p) && b.sample(at_b, p)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x4 mask with only the top-left 2x2 quadrant solid.
    fn quadrant() -> CollisionMask {
        let alpha = (0..16).map(|i| {
            let (x, y) = (i % 4, i / 4);
            if x < 2 && y < 2 { 255 } else { 0 }
        });
        CollisionMask::from_alpha(4, 4, alpha)
    }

    #[test]
    fn threshold_is_strict() {
        let m = CollisionMask::from_alpha(3, 1, [127, 128, 0]);
        assert!(!m.get(0, 0));
        assert!(m.get(1, 0));
        assert!(!m.get(2, 0));
        assert!(!m.get(-1, 0));
        assert!(!m.get(3, 0));
    }

    #[test]
    fn bounding_overlap_alone_is_not_enough() {
        let q = quadrant();
        let solid = CollisionMask::solid(2, 2);

        // Solid square over the empty bottom-right quadrant.
        let hit_empty = masks_overlap(&q, Placement::upright(Vec2::new(2.0, 2.0)), &solid, Placement::upright(Vec2::new(3.0, 3.0)));
        assert!(!hit_empty);

        // Solid square over the filled top-left quadrant.
        let hit_full = masks_overlap(&q, Placement::upright(Vec2::new(2.0, 2.0)), &solid, Placement::upright(Vec2::new(1.0, 1.0)));
        assert!(hit_full);
    }

    #[test]
    fn rotation_moves_the_silhouette() {
        let q = quadrant();
        let probe = CollisionMask::solid(1, 1);
        // Bottom-left pixel region of the 4x4 box centred on (2, 2).
        let probe_at = Placement::upright(Vec2::new(0.5, 3.5));

        assert!(!masks_overlap(&q, Placement::upright(Vec2::new(2.0, 2.0)), &probe, probe_at));

        // A quarter turn counter-clockwise brings the top-left quadrant to the bottom-left.
        let turned = Placement { center: Vec2::new(2.0, 2.0), angle_deg: 90.0 };
        assert!(masks_overlap(&q, turned, &probe, probe_at));
    }

    #[test]
    fn rotated_size_grows_at_forty_five_degrees() {
        let s = rotated_size(Vec2::new(10.0, 10.0), 45.0);
        assert!((s.x - 14.142_136).abs() < 1e-3);
        assert!((s.y - 14.142_136).abs() < 1e-3);
        let s = rotated_size(Vec2::new(10.0, 4.0), 90.0);
        assert!((s.x - 4.0).abs() < 1e-4 && (s.y - 10.0).abs() < 1e-4);
    }
}
