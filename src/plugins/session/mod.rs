//! Session plugin: one play session from entering Playing to leaving it.
//!
//! ```text
//! OnEnter(Playing): PlaySession { started_at }, score HUD, looping music
//! Update(Render):   score text <- elapsed since started_at
//! OnExit(Playing):  drop PlaySession (HUD and music are state-scoped)
//! ```
//!
//! The score is survival time in tenths of a second.

use std::time::Duration;

use bevy::audio::PlaybackSettings;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy::text::TextLayoutInfo;

use crate::common::layers::Layer;
use crate::common::screen::{screen_to_world, SCREEN_WIDTH};
use crate::common::state::{GameState, PlaySet};
use crate::common::tunables::Tunables;
use crate::plugins::assets::GameAssets;
use crate::plugins::core::{BACKGROUND, TEXT_COLOR};

/// Bottom edge of the score text, in screen pixels.
pub const SCORE_BOTTOM: f32 = 670.0;
/// Frame size before the text has been laid out.
const SCORE_BOX: Vec2 = Vec2::new(150.0, 60.0);
/// Padding added around the measured text.
const SCORE_PADDING: Vec2 = Vec2::new(20.0, 10.0);
const SCORE_BORDER: f32 = 5.0;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySession {
    pub started_at: Duration,
}

impl PlaySession {
    #[inline]
    pub fn score(&self, now: Duration) -> u64 {
        (now.saturating_sub(self.started_at).as_millis() / 100) as u64
    }
}

#[derive(Component)]
pub struct ScoreText;

/// Outline around the score. `inner` is the background-coloured fill.
#[derive(Component, Debug, Clone, Copy)]
pub struct ScoreFrame {
    pub inner: bool,
}

#[derive(Component)]
pub struct GameMusic;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), (begin_session, spawn_score_hud, start_music))
        .add_systems(OnExit(GameState::Playing), end_session)
        .add_systems(
            Update,
            (update_score, fit_score_frame).chain().in_set(PlaySet::Render),
        );
}

fn begin_session(mut commands: Commands, time: Res<Time>) {
    let started_at = time.elapsed();
    debug!("session started at {:?}", started_at);
    commands.insert_resource(PlaySession { started_at });
}

fn end_session(mut commands: Commands) {
    commands.remove_resource::<PlaySession>();
}

fn spawn_score_hud(mut commands: Commands, assets: Res<GameAssets>, tunables: Res<Tunables>) {
    let font_size = tunables.font_size;
    let center = Vec2::new(SCREEN_WIDTH * 0.5, SCORE_BOTTOM - font_size * 0.5);
    let frame = screen_to_world(center - Vec2::Y * 8.0);

    commands.spawn((
        Name::new("ScoreFrame"),
        ScoreFrame { inner: false },
        Sprite::from_color(TEXT_COLOR, SCORE_BOX),
        Transform::from_translation(frame.extend(Layer::Hud.z())),
        DespawnOnExit(GameState::Playing),
    ));
    commands.spawn((
        Name::new("ScoreFrameInner"),
        ScoreFrame { inner: true },
        Sprite::from_color(BACKGROUND, SCORE_BOX - Vec2::splat(SCORE_BORDER * 2.0)),
        Transform::from_translation(frame.extend(Layer::Hud.z() + 0.1)),
        DespawnOnExit(GameState::Playing),
    ));
    commands.spawn((
        Name::new("Score"),
        ScoreText,
        Text2d::new("0"),
        TextFont {
            font: assets.font.clone(),
            font_size,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Transform::from_translation(screen_to_world(center).extend(Layer::Hud.z() + 0.2)),
        DespawnOnExit(GameState::Playing),
    ));
}

fn start_music(mut commands: Commands, assets: Res<GameAssets>) {
    commands.spawn((
        Name::new("GameMusic"),
        GameMusic,
        AudioPlayer::new(assets.music.clone()),
        PlaybackSettings::LOOP,
        DespawnOnExit(GameState::Playing),
    ));
}

fn update_score(
    time: Res<Time>,
    session: Option<Res<PlaySession>>,
    mut q_text: Query<&mut Text2d, With<ScoreText>>,
) {
    let Some(session) = session else {
        return;
    };
    let score = session.score(time.elapsed()).to_string();

    for mut text in &mut q_text {
        if text.0 != score {
            text.0.clone_from(&score);
        }
    }
}

/// Frame outer size for text measured at `text_size`.
#[inline]
pub fn score_frame_size(text_size: Vec2) -> Vec2 {
    if text_size.cmple(Vec2::ZERO).any() {
        return SCORE_BOX;
    }
    text_size + SCORE_PADDING
}

/// Grow or shrink the outline with the laid-out score text.
fn fit_score_frame(
    q_text: Query<&TextLayoutInfo, With<ScoreText>>,
    mut q_frame: Query<(&ScoreFrame, &mut Sprite)>,
) {
    let Some(layout) = q_text.iter().next() else {
        return;
    };
    let outer = score_frame_size(layout.size);

    for (frame, mut sprite) in &mut q_frame {
        let size = if frame.inner { outer - Vec2::splat(SCORE_BORDER * 2.0) } else { outer };
        if sprite.custom_size != Some(size) {
            sprite.custom_size = Some(size);
        }
    }
}
