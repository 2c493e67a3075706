//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: DefaultPlugins (window, render, audio, logging) + asset loading + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::{GameState, PlaySet};
use crate::common::tunables::{Tunables, TUNABLES_FILE};
use crate::plugins;

// Only compile these imports on Windows.
#[cfg(target_os = "windows")]
use bevy::render::{
    settings::{Backends, PowerPreference, WgpuSettings},
    RenderPlugin,
};

pub fn run() -> AppExit {
    App::new().add_plugins(configure_full).run()
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    // Logging is not up yet, so the outcome is reported once it is.
    let loaded = Tunables::load(TUNABLES_FILE);
    let tunables = loaded.as_ref().cloned().unwrap_or_default();

    let default_plugins = DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: "Space Shooter".into(),
                resolution: WindowResolution::new(1280, 720),
                resizable: false,
                ..default()
            }),
            ..default()
        })
        .set(LogPlugin {
            filter: tunables.log_filter.clone(),
            ..default()
        });

    // On Windows, force DX12 and prefer the discrete GPU.
    #[cfg(target_os = "windows")]
    let default_plugins = default_plugins.set(RenderPlugin {
        render_creation: WgpuSettings {
            backends: Some(Backends::DX12),
            power_preference: PowerPreference::HighPerformance,
            ..default()
        }
        .into(),
        ..default()
    });

    app.add_plugins(default_plugins);

    match loaded {
        Ok(_) => debug!("tunables ready ({TUNABLES_FILE} or defaults)"),
        Err(err) => warn!("{err}; using default tunables"),
    }
    app.insert_resource(tunables);

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (asset loading/camera).
/// - Starts in `Menu`; the caller provides `GameAssets` and `SpriteGeometry`.
pub fn configure_headless(app: &mut App) {
    app.insert_state(GameState::Menu);
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    app.configure_sets(
        Update,
        (
            PlaySet::Input,
            PlaySet::Simulate,
            PlaySet::Spawn,
            PlaySet::Collide,
            PlaySet::Render,
        )
            .chain()
            .run_if(in_state(GameState::Playing)),
    );
    plugins::register_gameplay(app);
}
