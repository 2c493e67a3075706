//! Camera plugin.
//!
//! One fixed 2D camera for the whole run. The arena is exactly the window, so
//! the camera never moves and world origin stays at the screen centre.

use bevy::prelude::*;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Transform::from_xyz(0.0, 0.0, 999.0),
    ));
}
