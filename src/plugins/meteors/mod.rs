//! Meteors plugin: the hazards.
//!
//! A meteor falls along a random, slightly slanted direction, spins for show,
//! and is removed after a fixed lifetime no matter where it is. The lifetime
//! doubles as offscreen cleanup: a meteor that left the screen is gone within
//! a few seconds.
//!
//! Spawning is driven by a repeating timer that lives only while Playing.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::Rng;

use crate::common::layers::Layer;
use crate::common::mask::Placement;
use crate::common::screen::{screen_to_world, ScreenPos, SCREEN_WIDTH};
use crate::common::state::{GameState, PlaySet};
use crate::common::tunables::Tunables;
use crate::plugins::assets::GameAssets;
use crate::plugins::core::GameRng;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Meteor {
    /// Not normalized: the slant adds to the effective speed.
    pub direction: Vec2,
    pub speed: f32,
    /// Degrees, counter-clockwise.
    pub rotation: f32,
    /// Degrees per second.
    pub rotation_speed: f32,
    pub spawned_at: Duration,
    pub lifetime: Duration,
}

impl Meteor {
    pub fn random(rng: &mut impl Rng, tunables: &Tunables, now: Duration) -> Self {
        let drift = tunables.meteor_drift;
        Self {
            direction: Vec2::new(rng.random_range(-drift..=drift), 1.0),
            speed: rng.random_range(tunables.meteor_speed_min..=tunables.meteor_speed_max) as f32,
            rotation: 0.0,
            rotation_speed: rng
                .random_range(tunables.meteor_rotation_min..=tunables.meteor_rotation_max)
                as f32,
            spawned_at: now,
            lifetime: tunables.meteor_lifetime(),
        }
    }

    #[inline]
    pub fn step(&self, center: Vec2, dt: f32) -> Vec2 {
        center + self.direction * self.speed * dt
    }

    #[inline]
    pub fn spin(&mut self, dt: f32) {
        self.rotation += self.rotation_speed * dt;
    }

    #[inline]
    pub fn is_expired(&self, now: Duration) -> bool {
        now.saturating_sub(self.spawned_at) >= self.lifetime
    }

    #[inline]
    pub fn placement(&self, center: Vec2) -> Placement {
        Placement { center, angle_deg: self.rotation }
    }
}

#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct MeteorSpawnTimer(pub Timer);

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), start_spawn_timer)
        .add_systems(OnExit(GameState::Playing), stop_spawn_timer)
        .add_systems(
            Update,
            (
                update_meteors.in_set(PlaySet::Simulate),
                spawn_meteors.in_set(PlaySet::Spawn),
            ),
        );
}

fn start_spawn_timer(mut commands: Commands, tunables: Res<Tunables>) {
    commands.insert_resource(MeteorSpawnTimer(Timer::new(
        tunables.meteor_spawn_interval(),
        TimerMode::Repeating,
    )));
}

fn stop_spawn_timer(mut commands: Commands) {
    commands.remove_resource::<MeteorSpawnTimer>();
}

pub fn spawn_meteor(commands: &mut Commands, assets: &GameAssets, meteor: Meteor, center: Vec2) -> Entity {
    commands
        .spawn((
            Name::new("Meteor"),
            meteor,
            ScreenPos(center),
            Sprite::from_image(assets.meteor.clone()),
            Transform::from_translation(screen_to_world(center).extend(Layer::Meteor.z())),
            DespawnOnExit(GameState::Playing),
        ))
        .id()
}

fn spawn_meteors(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<Tunables>,
    assets: Res<GameAssets>,
    mut rng: ResMut<GameRng>,
    timer: Option<ResMut<MeteorSpawnTimer>>,
) {
    let Some(mut timer) = timer else {
        return;
    };

    timer.tick(time.delta());
    for _ in 0..timer.times_finished_this_tick() {
        let x = rng.random_range(0..=SCREEN_WIDTH as i32) as f32;
        let y = rng.random_range(tunables.meteor_spawn_y_min..=tunables.meteor_spawn_y_max) as f32;
        let meteor = Meteor::random(&mut rng.0, &tunables, time.elapsed());
        debug!("meteor at ({x}, {y}) speed {} dir {:?}", meteor.speed, meteor.direction);
        spawn_meteor(&mut commands, &assets, meteor, Vec2::new(x, y));
    }
}

fn update_meteors(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut Meteor, &mut ScreenPos, Option<&mut Transform>)>,
) {
    let dt = time.delta_secs();
    let now = time.elapsed();

    for (e, mut meteor, mut pos, tf) in &mut q {
        pos.0 = meteor.step(pos.0, dt);
        meteor.spin(dt);

        if let Some(mut tf) = tf {
            tf.rotation = Quat::from_rotation_z(meteor.rotation.to_radians());
        }

        if meteor.is_expired(now) {
            commands.entity(e).despawn();
        }
    }
}

#[cfg(test)]
mod tests;
