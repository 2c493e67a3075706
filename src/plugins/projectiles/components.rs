use bevy::prelude::*;

/// A laser bolt travelling straight up.
#[derive(Component, Debug, Clone, Copy)]
pub struct Laser {
    pub speed: f32,
}

impl Laser {
    /// New centre after `dt` seconds. Screen space, so "up" is -y.
    #[inline]
    pub fn step(&self, center: Vec2, dt: f32) -> Vec2 {
        center - Vec2::Y * self.speed * dt
    }

    /// Gone once the bottom edge is above the top of the screen.
    #[inline]
    pub fn is_offscreen(center: Vec2, size: Vec2) -> bool {
        center.y + size.y * 0.5 < 0.0
    }
}
