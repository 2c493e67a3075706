//! Player plugin.
//!
//! Pipeline (each play tick):
//! - Input: sample held keys, write PlayerInput resource
//! - Simulate: move the ship, fire, refresh the shot cooldown
//!
//! Firing does not spawn anything here. It writes a `FireLaser` message and the
//! projectiles plugin owns the spawn.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::screen::{bounds, mid_top, ScreenPos, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::common::state::{GameState, PlaySet};
use crate::common::tunables::Tunables;
use crate::plugins::assets::{GameAssets, SpriteGeometry};
use crate::plugins::core::Cheats;
use crate::plugins::projectiles::messages::FireLaser;

#[derive(Component, Debug, Clone)]
pub struct Player {
    /// Unit length, or zero when idle.
    pub direction: Vec2,
    pub speed: f32,
    pub cheat_speed: f32,
    pub cheat_active: bool,
    pub shot_ready: bool,
    pub last_shot: Duration,
    pub cooldown: Duration,
}

impl Player {
    pub fn new(tunables: &Tunables, cheat_active: bool) -> Self {
        Self {
            direction: Vec2::ZERO,
            speed: tunables.player_speed,
            cheat_speed: tunables.player_cheat_speed,
            cheat_active,
            shot_ready: true,
            last_shot: Duration::ZERO,
            cooldown: tunables.laser_cooldown(),
        }
    }

    #[inline]
    pub fn current_speed(&self) -> f32 {
        if self.cheat_active { self.cheat_speed } else { self.speed }
    }

    pub fn steer(&mut self, axis: Vec2) {
        self.direction = axis.normalize_or_zero();
    }

    #[inline]
    pub fn step(&self, pos: Vec2, dt: f32) -> Vec2 {
        pos + self.direction * self.current_speed() * dt
    }

    /// Consume the shot if one is ready. Starts the cooldown.
    pub fn try_fire(&mut self, now: Duration) -> bool {
        if !self.shot_ready {
            return false;
        }
        self.shot_ready = false;
        self.last_shot = now;
        true
    }

    pub fn refresh_cooldown(&mut self, now: Duration) {
        if !self.shot_ready && now.saturating_sub(self.last_shot) >= self.cooldown {
            self.shot_ready = true;
        }
    }
}

#[derive(Resource, Default, Debug)]
pub struct PlayerInput {
    pub move_axis: Vec2,
    pub fire: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::Playing), spawn)
        .add_systems(
            Update,
            (
                gather_input.in_set(PlaySet::Input),
                update_player.in_set(PlaySet::Simulate),
            ),
        );
}

fn spawn(
    mut commands: Commands,
    tunables: Res<Tunables>,
    cheats: Res<Cheats>,
    assets: Res<GameAssets>,
    mut input: ResMut<PlayerInput>,
) {
    *input = PlayerInput::default();

    if cheats.active {
        info!("cheats active for this session");
    }

    commands.spawn((
        Name::new("Player"),
        Player::new(&tunables, cheats.active),
        ScreenPos(Vec2::new(SCREEN_WIDTH * 0.5, SCREEN_HEIGHT * 0.5)),
        Sprite::from_image(assets.player.clone()),
        Transform::from_xyz(0.0, 0.0, Layer::Player.z()),
        DespawnOnExit(GameState::Playing),
    ));
}

fn gather_input(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    let mut axis = Vec2::ZERO;

    // Screen space: +y is down.
    if keys.pressed(KeyCode::ArrowRight) {
        axis.x += 1.0;
    }
    if keys.pressed(KeyCode::ArrowLeft) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        axis.y -= 1.0;
    }

    input.move_axis = axis;
    input.fire = keys.pressed(KeyCode::Space);
}

fn update_player(
    time: Res<Time>,
    input: Res<PlayerInput>,
    geometry: Res<SpriteGeometry>,
    q_player: Option<Single<(&mut Player, &mut ScreenPos)>>,
    mut fire: MessageWriter<FireLaser>,
) {
    let Some(single) = q_player else {
        return;
    };
    let (mut player, mut pos) = single.into_inner();

    let now = time.elapsed();

    player.steer(input.move_axis);
    pos.0 = player.step(pos.0, time.delta_secs());

    if input.fire && player.try_fire(now) {
        let origin = mid_top(bounds(pos.0, geometry.player.size()));
        fire.write(FireLaser { origin });
    }

    player.refresh_cooldown(now);
}
