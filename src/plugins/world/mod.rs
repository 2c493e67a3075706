//! World plugin: the star field and the screen-to-world sync.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::Rng;

use crate::common::layers::Layer;
use crate::common::screen::{screen_to_world, ScreenPos, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::common::state::{GameState, PlaySet};
use crate::common::tunables::Tunables;
use crate::plugins::assets::GameAssets;
use crate::plugins::core::GameRng;

#[derive(Component)]
pub struct Star;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_stars)
        .add_systems(Update, sync_transforms.in_set(PlaySet::Render));
}

/// Decorative stars at whole-pixel positions. They never move.
fn spawn_stars(
    mut commands: Commands,
    tunables: Res<Tunables>,
    assets: Res<GameAssets>,
    mut rng: ResMut<GameRng>,
) {
    for _ in 0..tunables.star_count {
        let center = Vec2::new(
            rng.random_range(0..=SCREEN_WIDTH as i32) as f32,
            rng.random_range(0..=SCREEN_HEIGHT as i32) as f32,
        );
        commands.spawn((
            Name::new("Star"),
            Star,
            ScreenPos(center),
            Sprite::from_image(assets.star.clone()),
            Transform::from_translation(screen_to_world(center).extend(Layer::Background.z())),
            DespawnOnExit(GameState::Playing),
        ));
    }
}

/// Copy gameplay positions into render transforms. Depth is left alone.
pub fn sync_transforms(mut q: Query<(&ScreenPos, &mut Transform), Changed<ScreenPos>>) {
    for (pos, mut tf) in &mut q {
        let p = screen_to_world(pos.0);
        tf.translation.x = p.x;
        tf.translation.y = p.y;
    }
}
