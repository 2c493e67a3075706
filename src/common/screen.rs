//! Screen space.
//!
//! Gameplay runs in screen coordinates: origin top-left, +y down, 1280x720.
//! Rendering uses Bevy's world space (origin centre, +y up). `ScreenPos` is the
//! source of truth and `world::sync_transforms` derives `Transform` from it.

use bevy::prelude::*;

pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Centre of an entity in screen coordinates.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Deref, DerefMut)]
pub struct ScreenPos(pub Vec2);

#[inline]
pub fn screen_to_world(p: Vec2) -> Vec2 {
    Vec2::new(p.x - SCREEN_WIDTH * 0.5, SCREEN_HEIGHT * 0.5 - p.y)
}

/// Screen-space bounds of a sprite of `size` centred on `center`.
///
/// `min` is the top-left corner, `max` the bottom-right one.
#[inline]
pub fn bounds(center: Vec2, size: Vec2) -> Rect {
    Rect::from_center_size(center, size)
}

/// Strict overlap: rectangles that only share an edge do not collide.
#[inline]
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}

#[inline]
pub fn mid_top(r: Rect) -> Vec2 {
    Vec2::new(r.center().x, r.min.y)
}
