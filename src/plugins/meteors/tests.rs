use std::time::Duration;

use approx::assert_relative_eq;
use bevy::prelude::*;

use crate::common::screen::ScreenPos;
use crate::common::test_utils::{advance_time, run_system_once, set_elapsed_ms};
use crate::common::tunables::Tunables;
use crate::plugins::assets::GameAssets;
use crate::plugins::core::GameRng;

use super::*;

fn straight_meteor(speed: f32) -> Meteor {
    Meteor {
        direction: Vec2::new(0.0, 1.0),
        speed,
        rotation: 0.0,
        rotation_speed: 60.0,
        spawned_at: Duration::ZERO,
        lifetime: Duration::from_millis(3000),
    }
}

fn meteor_world() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(GameAssets::default());
    world.insert_resource(GameRng::seeded(42));
    world.insert_resource(Time::<()>::default());
    world
}

#[test]
fn falls_for_one_second_at_sixty_ticks() {
    let mut world = meteor_world();
    let e = world.spawn((straight_meteor(450.0), ScreenPos(Vec2::new(640.0, -150.0)))).id();

    for _ in 0..60 {
        advance_time(&mut world, 1.0 / 60.0);
        run_system_once(&mut world, update_meteors);
    }

    let pos = world.get::<ScreenPos>(e).unwrap().0;
    assert_relative_eq!(pos.x, 640.0);
    assert_relative_eq!(pos.y, 300.0, epsilon = 0.05);
    assert!(world.get_entity(e).is_ok());
}

#[test]
fn step_is_direction_times_speed_without_renormalizing() {
    let mut m = straight_meteor(400.0);
    m.direction = Vec2::new(0.5, 1.0);
    let next = m.step(Vec2::new(10.0, 20.0), 0.25);
    assert_eq!(next, Vec2::new(10.0, 20.0) + Vec2::new(0.5, 1.0) * 400.0 * 0.25);
    // Effective speed exceeds the nominal one when slanted.
    assert!((next - Vec2::new(10.0, 20.0)).length() > 100.0);
}

#[test]
fn spins_and_orients_transform() {
    let mut world = meteor_world();
    let e = world
        .spawn((straight_meteor(0.0), ScreenPos(Vec2::ZERO), Transform::default()))
        .id();

    advance_time(&mut world, 1.5);
    run_system_once(&mut world, update_meteors);

    let meteor = world.get::<Meteor>(e).unwrap();
    assert_relative_eq!(meteor.rotation, 90.0, epsilon = 1e-3);
    let tf = world.get::<Transform>(e).unwrap();
    let (_, angle) = tf.rotation.to_axis_angle();
    assert_relative_eq!(angle, std::f32::consts::FRAC_PI_2, epsilon = 1e-4);
}

#[test]
fn expires_at_lifetime_regardless_of_position() {
    let mut world = meteor_world();
    // Speed zero: still on screen when it expires.
    let e = world.spawn((straight_meteor(0.0), ScreenPos(Vec2::new(640.0, 360.0)))).id();

    set_elapsed_ms(&mut world, 2999);
    run_system_once(&mut world, update_meteors);
    assert!(world.get_entity(e).is_ok());

    set_elapsed_ms(&mut world, 3000);
    run_system_once(&mut world, update_meteors);
    assert!(world.get_entity(e).is_err());
}

#[test]
fn random_meteors_stay_in_configured_ranges() {
    let tunables = Tunables::default();
    let mut rng = GameRng::seeded(9);

    for _ in 0..500 {
        let m = Meteor::random(&mut rng.0, &tunables, Duration::from_secs(5));
        assert!((-0.5..=0.5).contains(&m.direction.x));
        assert_eq!(m.direction.y, 1.0);
        assert!((400.0..=500.0).contains(&m.speed));
        assert_eq!(m.speed.fract(), 0.0);
        assert!((40.0..=80.0).contains(&m.rotation_speed));
        assert_eq!(m.spawned_at, Duration::from_secs(5));
        assert_eq!(m.lifetime, Duration::from_millis(3000));
    }
}

#[test]
fn timer_spawns_one_meteor_per_interval_above_the_screen() {
    let mut world = meteor_world();
    run_system_once(&mut world, start_spawn_timer);

    advance_time(&mut world, 0.5);
    run_system_once(&mut world, spawn_meteors);
    assert_eq!(world.query::<&Meteor>().iter(&world).count(), 0);

    advance_time(&mut world, 0.5);
    run_system_once(&mut world, spawn_meteors);
    advance_time(&mut world, 1.0);
    run_system_once(&mut world, spawn_meteors);

    let spawned: Vec<Vec2> = world
        .query::<(&Meteor, &ScreenPos)>()
        .iter(&world)
        .map(|(_, p)| p.0)
        .collect();
    assert_eq!(spawned.len(), 2);
    for p in spawned {
        assert!((0.0..=1280.0).contains(&p.x));
        assert!((-200.0..=-100.0).contains(&p.y));
        assert_eq!(p.x.fract(), 0.0);
    }
}

#[test]
fn no_timer_no_spawns() {
    let mut world = meteor_world();
    run_system_once(&mut world, start_spawn_timer);
    run_system_once(&mut world, stop_spawn_timer);

    advance_time(&mut world, 5.0);
    run_system_once(&mut world, spawn_meteors);
    assert_eq!(world.query::<&Meteor>().iter(&world).count(), 0);
}
