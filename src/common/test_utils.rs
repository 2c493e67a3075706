//! Test helpers.
//!
//! Systems are driven on a bare `World` with `RunSystemOnce`; `world.flush()`
//! afterwards applies queued commands so despawns and spawns are visible to
//! assertions. Gameplay systems read `Res<Time>`, which tests advance by hand.

use std::time::Duration;

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Advance the generic clock by `secs`, creating it on first use.
pub fn advance_time(world: &mut World, secs: f32) {
    if world.get_resource::<Time>().is_none() {
        world.insert_resource(Time::<()>::default());
    }
    world.resource_mut::<Time>().advance_by(Duration::from_secs_f32(secs));
}

/// Move the generic clock to an absolute elapsed time in milliseconds.
pub fn set_elapsed_ms(world: &mut World, ms: u64) {
    if world.get_resource::<Time>().is_none() {
        world.insert_resource(Time::<()>::default());
    }
    world.resource_mut::<Time>().advance_to(Duration::from_millis(ms));
}
