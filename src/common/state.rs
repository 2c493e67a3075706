//! Global state machine and per-tick ordering.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    /// Waiting on the asset bundle. Leaves for `Menu` once everything is loaded.
    #[default]
    Loading,
    Menu,
    Instructions,
    Playing,
}

/// Order of one play tick.
///
/// ```text
/// Input -> Simulate -> Spawn -> Collide -> Render
/// ```
///
/// Configured as a chain in `game::configure_game`, so Bevy inserts sync points
/// between sets and despawns queued by one stage are applied before the next.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaySet {
    Input,
    Simulate,
    Spawn,
    Collide,
    Render,
}
