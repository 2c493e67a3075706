//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime, `InputPlugin` the keyboard.
//! - placeholder assets and box geometry stand in for the loaded files.
//! - we then call `space_shooter::game::configure_headless` to install gameplay plugins.
#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::{ButtonState, InputPlugin};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use space_shooter::common::state::GameState;
use space_shooter::plugins::assets::{GameAssets, SpriteGeometry};
use space_shooter::plugins::core::GameRng;

/// Fixed tick for deterministic movement.
pub const TICK: Duration = Duration::from_millis(16);

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        InputPlugin,
        AssetPlugin::default(),
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK))
        .insert_resource(GameRng::seeded(1))
        .insert_resource(GameAssets::default())
        .insert_resource(SpriteGeometry::placeholder());

    space_shooter::game::configure_headless(&mut app);
    app
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

/// Queue one key press for the next update.
pub fn press(app: &mut App, key_code: KeyCode, text: &str) {
    let logical_key = if text.is_empty() {
        match key_code {
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            _ => Key::Unidentified(bevy::input::keyboard::NativeKey::Unidentified),
        }
    } else {
        Key::Character(text.into())
    };
    app.world_mut().write_message(KeyboardInput {
        key_code,
        logical_key,
        state: ButtonState::Pressed,
        text: None,
        repeat: false,
        window: Entity::PLACEHOLDER,
    });
}

pub fn tick(app: &mut App, n: usize) {
    for _ in 0..n {
        app.update();
    }
}

/// Menu -> Playing, with the player spawned.
pub fn start_session(app: &mut App) {
    tick(app, 1);
    press(app, KeyCode::KeyS, "s");
    tick(app, 2);
    assert_eq!(state(app), GameState::Playing);
}
