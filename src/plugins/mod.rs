//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod assets;
pub mod collision;
pub mod core;
pub mod effects;
pub mod menu;
pub mod meteors;
pub mod player;
pub mod projectiles;
pub mod session;
pub mod world;

// Render-only
pub mod camera;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    menu::plugin(app);
    session::plugin(app);
    world::plugin(app);
    player::plugin(app);
    meteors::plugin(app);
    effects::plugin(app);
    collision::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register plugins that need the asset server, a window or a renderer.
pub fn register_render(app: &mut App) {
    assets::plugin(app);
    camera::plugin(app);
}
