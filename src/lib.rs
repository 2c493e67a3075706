//! Space Shooter: a single-screen arcade shooter on Bevy.
//!
//! The binary in `main.rs` only calls [`game::run`]. Everything else lives here
//! so integration tests in `tests/` can build a headless app from the same
//! plugins.

pub mod common;
pub mod game;
pub mod plugins;
