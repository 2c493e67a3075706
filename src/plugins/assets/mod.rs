//! Asset bundle: everything the game draws or plays, loaded once at startup.
//!
//! ```text
//! Startup:          queue every file on the AssetServer -> GameAssets + PendingAssets
//! Update(Loading):  poll load states
//!                     any Failed  -> error! + AppExit::error()
//!                     all Loaded  -> build SpriteGeometry, enter Menu
//! ```
//!
//! There is no degraded mode: one missing file ends the process.

use bevy::prelude::*;

use crate::common::error::AssetError;
use crate::common::mask::CollisionMask;
use crate::common::state::GameState;

pub const PLAYER_IMAGE: &str = "images/player.png";
pub const STAR_IMAGE: &str = "images/star.png";
pub const METEOR_IMAGE: &str = "images/meteor.png";
pub const LASER_IMAGE: &str = "images/laser.png";
pub const FONT: &str = "images/Oxanium-Bold.ttf";
pub const LASER_SOUND: &str = "audio/laser.wav";
pub const EXPLOSION_SOUND: &str = "audio/explosion.wav";
pub const GAME_MUSIC: &str = "audio/game_music.wav";
pub const EXPLOSION_FRAMES: usize = 21;

/// Handles to every game asset. Shared read-only by all plugins.
#[derive(Resource, Debug, Clone)]
pub struct GameAssets {
    pub player: Handle<Image>,
    pub star: Handle<Image>,
    pub meteor: Handle<Image>,
    pub laser: Handle<Image>,
    pub explosion: Vec<Handle<Image>>,
    pub font: Handle<Font>,
    pub laser_sound: Handle<AudioSource>,
    pub explosion_sound: Handle<AudioSource>,
    pub music: Handle<AudioSource>,
}

/// Placeholder handles: nothing loaded, but the full frame count.
impl Default for GameAssets {
    fn default() -> Self {
        Self {
            player: default(),
            star: default(),
            meteor: default(),
            laser: default(),
            explosion: vec![Handle::default(); EXPLOSION_FRAMES],
            font: default(),
            laser_sound: default(),
            explosion_sound: default(),
            music: default(),
        }
    }
}

/// Sprite sizes and collision masks, derived from the loaded images.
#[derive(Resource, Debug, Clone)]
pub struct SpriteGeometry {
    pub player: CollisionMask,
    pub meteor: CollisionMask,
    pub laser: Vec2,
}

impl SpriteGeometry {
    /// Fully opaque boxes, for headless runs that never load images.
    pub fn boxes(player: UVec2, meteor: UVec2, laser: Vec2) -> Self {
        Self {
            player: CollisionMask::solid(player.x, player.y),
            meteor: CollisionMask::solid(meteor.x, meteor.y),
            laser,
        }
    }

    /// Sizes of the stock art.
    pub fn placeholder() -> Self {
        Self::boxes(UVec2::new(112, 75), UVec2::new(101, 84), Vec2::new(9.0, 54.0))
    }

    pub fn from_images(assets: &GameAssets, images: &Assets<Image>) -> Result<Self, AssetError> {
        let image = |handle: &Handle<Image>, path: &str| {
            images.get(handle).ok_or_else(|| AssetError::MissingImage { path: path.into() })
        };
        let mask = |handle: &Handle<Image>, path: &str| {
            CollisionMask::from_image(image(handle, path)?)
                .ok_or_else(|| AssetError::NoPixelData { path: path.into() })
        };

        Ok(Self {
            player: mask(&assets.player, PLAYER_IMAGE)?,
            meteor: mask(&assets.meteor, METEOR_IMAGE)?,
            laser: image(&assets.laser, LASER_IMAGE)?.size().as_vec2(),
        })
    }
}

/// Paths still being watched while in `GameState::Loading`.
#[derive(Resource, Debug, Default)]
struct PendingAssets(Vec<(String, UntypedHandle)>);

impl PendingAssets {
    fn track<A: Asset>(&mut self, server: &AssetServer, path: &str) -> Handle<A> {
        let handle: Handle<A> = server.load(path.to_owned());
        self.0.push((path.to_owned(), handle.clone().untyped()));
        handle
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, queue_assets)
        .add_systems(Update, poll_assets.run_if(in_state(GameState::Loading)));
}

fn explosion_frame_path(i: usize) -> String {
    format!("images/explosion/{i}.png")
}

fn queue_assets(mut commands: Commands, server: Res<AssetServer>) {
    let mut pending = PendingAssets::default();

    let assets = GameAssets {
        player: pending.track(&server, PLAYER_IMAGE),
        star: pending.track(&server, STAR_IMAGE),
        meteor: pending.track(&server, METEOR_IMAGE),
        laser: pending.track(&server, LASER_IMAGE),
        explosion: (0..EXPLOSION_FRAMES)
            .map(|i| pending.track(&server, &explosion_frame_path(i)))
            .collect(),
        font: pending.track(&server, FONT),
        laser_sound: pending.track(&server, LASER_SOUND),
        explosion_sound: pending.track(&server, EXPLOSION_SOUND),
        music: pending.track(&server, GAME_MUSIC),
    };

    debug!("queued {} assets", pending.0.len());
    commands.insert_resource(assets);
    commands.insert_resource(pending);
}

/// `Ok(true)` once everything is loaded, `Ok(false)` while anything is in flight.
fn check_pending(server: &AssetServer, pending: &PendingAssets) -> Result<bool, AssetError> {
    let mut ready = true;
    for (path, handle) in &pending.0 {
        match server.load_state(handle.id()) {
            bevy::asset::LoadState::Loaded => {}
            bevy::asset::LoadState::Failed(err) => {
                return Err(AssetError::LoadFailed { path: path.clone(), reason: err.to_string() });
            }
            _ => ready = false,
        }
    }
    Ok(ready)
}

fn poll_assets(
    mut commands: Commands,
    server: Res<AssetServer>,
    pending: Res<PendingAssets>,
    assets: Res<GameAssets>,
    images: Res<Assets<Image>>,
    mut next: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    let geometry = check_pending(&server, &pending).and_then(|ready| {
        ready.then(|| SpriteGeometry::from_images(&assets, &images)).transpose()
    });

    match geometry {
        Ok(None) => {}
        Ok(Some(geometry)) => {
            info!(
                "assets ready: ship {}x{}, meteor {}x{}",
                geometry.player.size().x,
                geometry.player.size().y,
                geometry.meteor.size().x,
                geometry.meteor.size().y,
            );
            commands.insert_resource(geometry);
            commands.remove_resource::<PendingAssets>();
            next.set(GameState::Menu);
        }
        Err(err) => {
            error!("{err}");
            exit.write(AppExit::error());
        }
    }
}
