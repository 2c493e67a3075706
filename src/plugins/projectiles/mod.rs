//! Projectiles plugin: player lasers.
//!
//! ```text
//! Simulate:  update_player ──FireLaser──> spawn_lasers (Spawn)
//!            move_lasers: straight up, despawn past the top edge
//! Collide:   hits are resolved by the collision director, not here
//! ```
//!
//! A laser knows nothing about meteors. It only moves and leaves the screen.

pub mod components;
pub mod messages;
pub mod systems;

use bevy::prelude::*;

use crate::common::state::PlaySet;

pub use components::Laser;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<messages::FireLaser>();

        app.add_systems(
            Update,
            (
                systems::move_lasers.in_set(PlaySet::Simulate),
                systems::spawn_lasers.in_set(PlaySet::Spawn),
            ),
        );
    }
}

#[cfg(test)]
mod tests;
