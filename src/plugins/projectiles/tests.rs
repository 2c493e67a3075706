//! Laser lifecycle tests, driven on a bare `World`.

use approx::assert_relative_eq;
use bevy::audio::AudioPlayer;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::screen::ScreenPos;
use crate::common::test_utils::{advance_time, run_system_once};
use crate::common::tunables::Tunables;
use crate::plugins::assets::{GameAssets, SpriteGeometry};

use super::{components::Laser, messages::FireLaser, systems};

fn laser_world() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(GameAssets::default());
    world.insert_resource(SpriteGeometry::placeholder());
    world.insert_resource(Time::<()>::default());
    world.init_resource::<Messages<FireLaser>>();
    world
}

#[test]
fn fire_request_spawns_laser_sitting_on_origin_with_sound() {
    let mut world = laser_world();
    world.write_message(FireLaser { origin: Vec2::new(100.0, 500.0) });

    run_system_once(&mut world, systems::spawn_lasers);

    let (laser, pos) = world.query::<(&Laser, &ScreenPos)>().single(&world).unwrap();
    assert_eq!(laser.speed, 400.0);
    // Placeholder laser is 54 px tall; its bottom edge is the origin.
    assert_relative_eq!(pos.0.x, 100.0);
    assert_relative_eq!(pos.0.y + 27.0, 500.0);

    let sounds = world.query::<&AudioPlayer>().iter(&world).count();
    assert_eq!(sounds, 1);
}

#[test]
fn laser_moves_up_at_fixed_speed() {
    let mut world = laser_world();
    let e = world.spawn((Laser { speed: 400.0 }, ScreenPos(Vec2::new(50.0, 600.0)))).id();

    for _ in 0..10 {
        advance_time(&mut world, 0.05);
        run_system_once(&mut world, systems::move_lasers);
    }

    let pos = world.get::<ScreenPos>(e).unwrap().0;
    assert_relative_eq!(pos.x, 50.0);
    assert_relative_eq!(pos.y, 400.0, epsilon = 1e-3);
}

#[test]
fn laser_despawns_only_after_bottom_edge_passes_top() {
    let mut world = laser_world();
    // Bottom edge at y = 200: it takes 200 / 400 = 0.5 s to reach the top.
    let e = world.spawn((Laser { speed: 400.0 }, ScreenPos(Vec2::new(50.0, 200.0 - 27.0)))).id();

    advance_time(&mut world, 0.25);
    run_system_once(&mut world, systems::move_lasers);
    advance_time(&mut world, 0.25);
    run_system_once(&mut world, systems::move_lasers);
    assert!(world.get_entity(e).is_ok(), "bottom edge exactly at 0 is still on screen");

    advance_time(&mut world, 0.01);
    run_system_once(&mut world, systems::move_lasers);
    assert!(world.get_entity(e).is_err());
}

#[test]
fn offscreen_check_uses_bottom_edge() {
    let size = Vec2::new(9.0, 54.0);
    assert!(!Laser::is_offscreen(Vec2::new(0.0, -26.0), size));
    assert!(Laser::is_offscreen(Vec2::new(0.0, -27.5), size));
}
