//! Buffered spawn requests.
//!
//! Producers (player input, collision resolution) only write intent. The
//! consumers in `systems` are the single place that spawns lasers and
//! explosions and fires their sound cues.

use bevy::prelude::*;

/// Fire a laser whose bottom-centre sits at `origin` (screen space).
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct FireLaser {
    pub origin: Vec2,
}
