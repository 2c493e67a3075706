use bevy::audio::{AudioPlayer, PlaybackSettings};
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::screen::{screen_to_world, ScreenPos};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::assets::{GameAssets, SpriteGeometry};

use super::components::Laser;
use super::messages::FireLaser;

/// Consumer: one laser (plus its sound cue) per `FireLaser`.
pub fn spawn_lasers(
    mut commands: Commands,
    mut requests: MessageReader<FireLaser>,
    assets: Res<GameAssets>,
    geometry: Res<SpriteGeometry>,
    tunables: Res<Tunables>,
) {
    for req in requests.read() {
        let center = req.origin - Vec2::Y * geometry.laser.y * 0.5;

        commands.spawn((
            Name::new("Laser"),
            Laser { speed: tunables.laser_speed },
            ScreenPos(center),
            Sprite::from_image(assets.laser.clone()),
            Transform::from_translation(screen_to_world(center).extend(Layer::Laser.z())),
            DespawnOnExit(GameState::Playing),
        ));

        commands.spawn((
            Name::new("LaserSound"),
            AudioPlayer::new(assets.laser_sound.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}

pub fn move_lasers(
    mut commands: Commands,
    time: Res<Time>,
    geometry: Res<SpriteGeometry>,
    mut q: Query<(Entity, &Laser, &mut ScreenPos)>,
) {
    let dt = time.delta_secs();
    for (e, laser, mut pos) in &mut q {
        pos.0 = laser.step(pos.0, dt);
        if Laser::is_offscreen(pos.0, geometry.laser) {
            commands.entity(e).despawn();
        }
    }
}
