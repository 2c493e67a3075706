//! Effects plugin: explosions.
//!
//! An explosion is a flipbook. Its frame index advances at a fixed rate in
//! seconds (not per rendered frame), so the animation runs at the same speed on
//! any display. When the index passes the last frame the entity is removed.

use bevy::audio::{AudioPlayer, PlaybackSettings};
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::screen::{screen_to_world, ScreenPos};
use crate::common::state::{GameState, PlaySet};
use crate::common::tunables::Tunables;
use crate::plugins::assets::GameAssets;

/// Spawn an explosion centred on `at` (screen space).
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnExplosion {
    pub at: Vec2,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Explosion {
    /// Fractional; the shown frame is its floor.
    pub frame_index: f32,
    pub fps: f32,
    pub frame_count: usize,
}

impl Explosion {
    pub fn new(fps: f32, frame_count: usize) -> Self {
        Self { frame_index: 0.0, fps, frame_count }
    }

    /// Advance by `dt`. Returns the frame to show, or `None` once finished.
    pub fn advance(&mut self, dt: f32) -> Option<usize> {
        self.frame_index += self.fps * dt;
        (self.frame_index < self.frame_count as f32).then(|| self.frame_index as usize)
    }
}

pub fn plugin(app: &mut App) {
    app.add_message::<SpawnExplosion>().add_systems(
        Update,
        (
            animate_explosions.in_set(PlaySet::Simulate),
            spawn_explosions.in_set(PlaySet::Render),
        ),
    );
}

/// Consumer: explosion sprite plus a one-shot sound per request.
fn spawn_explosions(
    mut commands: Commands,
    mut requests: MessageReader<SpawnExplosion>,
    assets: Res<GameAssets>,
    tunables: Res<Tunables>,
) {
    for req in requests.read() {
        let first = assets.explosion.first().cloned().unwrap_or_default();

        commands.spawn((
            Name::new("Explosion"),
            Explosion::new(tunables.explosion_fps, assets.explosion.len()),
            ScreenPos(req.at),
            Sprite::from_image(first),
            Transform::from_translation(screen_to_world(req.at).extend(Layer::Effect.z())),
            DespawnOnExit(GameState::Playing),
        ));

        commands.spawn((
            Name::new("ExplosionSound"),
            AudioPlayer::new(assets.explosion_sound.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}

fn animate_explosions(
    mut commands: Commands,
    time: Res<Time>,
    assets: Res<GameAssets>,
    mut q: Query<(Entity, &mut Explosion, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (e, mut explosion, mut sprite) in &mut q {
        match explosion.advance(dt) {
            Some(frame) => {
                if let Some(image) = assets.explosion.get(frame) {
                    if sprite.image != *image {
                        sprite.image = image.clone();
                    }
                }
            }
            None => {
                commands.entity(e).despawn();
            }
        }
    }
}
