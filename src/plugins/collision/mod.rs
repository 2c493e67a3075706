//! Collision director.
//!
//! Runs once per play tick, after everything has moved and spawned:
//!
//! 1. Ship vs meteors, per-pixel. Skipped entirely while cheats are on. Every
//!    touching meteor is removed and the session ends this tick.
//! 2. Lasers vs meteors, bounding boxes only. A laser removes every meteor it
//!    overlaps, dies once, and leaves one explosion at its tip.
//!
//! The pass returns a `Verdict`; `apply_verdict` turns `Stop` into the
//! transition back to the menu.

use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::mask::{masks_overlap, Placement};
use crate::common::screen::{bounds, mid_top, rects_overlap, ScreenPos};
use crate::common::state::{GameState, PlaySet};
use crate::plugins::assets::SpriteGeometry;
use crate::plugins::effects::SpawnExplosion;
use crate::plugins::meteors::Meteor;
use crate::plugins::player::Player;
use crate::plugins::projectiles::Laser;
use crate::plugins::session::PlaySession;

/// Should the play session go on after this tick?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Stop,
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        resolve_collisions.pipe(apply_verdict).in_set(PlaySet::Collide),
    );
}

pub fn resolve_collisions(
    mut commands: Commands,
    geometry: Res<SpriteGeometry>,
    q_player: Option<Single<(&Player, &ScreenPos)>>,
    q_meteors: Query<(Entity, &Meteor, &ScreenPos)>,
    q_lasers: Query<(Entity, &ScreenPos), With<Laser>>,
    mut explosions: MessageWriter<SpawnExplosion>,
    // Meteors already destroyed this tick
    mut destroyed: Local<HashSet<Entity>>,
) -> Verdict {
    destroyed.clear();

    if let Some(single) = q_player {
        let (player, ship) = single.into_inner();

        if !player.cheat_active {
            let at = Placement::upright(ship.0);
            let mut hit = false;

            for (e, meteor, pos) in &q_meteors {
                if masks_overlap(&geometry.player, at, &geometry.meteor, meteor.placement(pos.0)) {
                    commands.entity(e).despawn();
                    hit = true;
                }
            }

            if hit {
                return Verdict::Stop;
            }
        }
    }

    for (laser, laser_pos) in &q_lasers {
        let laser_rect = bounds(laser_pos.0, geometry.laser);
        let mut hit = false;

        for (e, meteor, pos) in &q_meteors {
            if destroyed.contains(&e) {
                continue;
            }
            let meteor_rect = geometry.meteor.bounds(meteor.placement(pos.0));
            if rects_overlap(laser_rect, meteor_rect) {
                destroyed.insert(e);
                commands.entity(e).despawn();
                hit = true;
            }
        }

        if hit {
            commands.entity(laser).despawn();
            explosions.write(SpawnExplosion { at: mid_top(laser_rect) });
        }
    }

    Verdict::Continue
}

fn apply_verdict(
    In(verdict): In<Verdict>,
    time: Res<Time>,
    session: Option<Res<PlaySession>>,
    mut next: ResMut<NextState<GameState>>,
) {
    if verdict == Verdict::Continue {
        return;
    }

    match session {
        Some(session) => info!("ship destroyed, score {}", session.score(time.elapsed())),
        None => info!("ship destroyed"),
    }
    next.set(GameState::Menu);
}
