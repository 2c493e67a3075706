//! Core plugin: shared resources and global settings.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::common::tunables::Tunables;

/// Menu background, `#3a2e3f`.
pub const BACKGROUND: Color = Color::srgb(0.227, 0.180, 0.247);
pub const TEXT_COLOR: Color = Color::srgb(0.941, 0.941, 0.941);
pub const CODE_COLOR: Color = Color::srgb(1.0, 0.784, 0.784);

/// Gameplay randomness (spawn positions, meteor kinematics, stars).
#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct GameRng(pub Pcg32);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::seeded(rand::random())
    }
}

/// Unlocked cheats. Outlives play sessions: set once from the menu, it stays
/// on until the process exits.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cheats {
    pub active: bool,
}

pub fn plugin(app: &mut App) {
    if !app.world().contains_resource::<Tunables>() {
        app.insert_resource(Tunables::default());
    }
    app.init_resource::<GameRng>()
        .init_resource::<Cheats>()
        .insert_resource(ClearColor(BACKGROUND));
}
