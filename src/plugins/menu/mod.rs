//! Menu plugin: the title screen, the instructions screen and code entry.
//!
//! ```text
//! Menu:          S -> Playing, I -> Instructions, Q -> exit
//!                letters -> SecretCode, Backspace, Enter -> submit
//! Instructions:  B -> Menu
//! ```
//!
//! The code buffer and the feedback line survive trips to Instructions but are
//! cleared whenever a play session ends.
//!
//! Screens are plain `Text2d` entities scoped to their state. Menu keys come
//! from `KeyboardInput` messages, not held-key state, so each press acts once.

use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::screen::{screen_to_world, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::assets::GameAssets;
use crate::plugins::core::{Cheats, CODE_COLOR, TEXT_COLOR};

pub mod code;

pub use code::{menu_action, CodeOutcome, MenuAction, MenuMessage, SecretCode};

const CODE_PROMPT: &str = "Enter Secret Code: ";

/// Text line showing the code buffer.
#[derive(Component)]
pub struct CodeLine;

/// Text line showing the last submit result.
#[derive(Component)]
pub struct MessageLine;

pub fn plugin(app: &mut App) {
    app.init_resource::<SecretCode>()
        .init_resource::<MenuMessage>()
        .add_systems(OnEnter(GameState::Menu), spawn_menu_screen)
        .add_systems(OnEnter(GameState::Instructions), spawn_instructions_screen)
        .add_systems(OnExit(GameState::Playing), clear_code_entry)
        .add_systems(
            Update,
            (menu_keys, refresh_menu_text)
                .chain()
                .run_if(in_state(GameState::Menu)),
        )
        .add_systems(Update, instructions_keys.run_if(in_state(GameState::Instructions)));
}

fn text_line(
    font: &Handle<Font>,
    font_size: f32,
    text: impl Into<String>,
    color: Color,
    y: f32,
) -> (Text2d, TextFont, TextColor, Transform) {
    let at = screen_to_world(Vec2::new(SCREEN_WIDTH * 0.5, y));
    (
        Text2d::new(text),
        TextFont {
            font: font.clone(),
            font_size,
            ..default()
        },
        TextColor(color),
        Transform::from_translation(at.extend(Layer::Hud.z())),
    )
}

fn spawn_menu_screen(
    mut commands: Commands,
    assets: Res<GameAssets>,
    tunables: Res<Tunables>,
    code: Res<SecretCode>,
    message: Res<MenuMessage>,
) {
    let (font, size) = (&assets.font, tunables.font_size);
    for (text, y) in [
        ("Space Shooter", SCREEN_HEIGHT / 4.0),
        ("Press S to Start", SCREEN_HEIGHT / 2.0),
        ("Press I for Instructions", SCREEN_HEIGHT / 1.5),
        ("Press Q to Quit", SCREEN_HEIGHT / 1.2),
    ] {
        commands.spawn((text_line(font, size, text, TEXT_COLOR, y), DespawnOnExit(GameState::Menu)));
    }

    commands.spawn((
        CodeLine,
        text_line(font, size, format!("{CODE_PROMPT}{}", code.as_str()), CODE_COLOR, SCREEN_HEIGHT / 1.1),
        DespawnOnExit(GameState::Menu),
    ));
    commands.spawn((
        MessageLine,
        text_line(font, size, message.0.clone(), CODE_COLOR, SCREEN_HEIGHT / 1.05),
        DespawnOnExit(GameState::Menu),
    ));
}

fn spawn_instructions_screen(mut commands: Commands, assets: Res<GameAssets>, tunables: Res<Tunables>) {
    let (font, size) = (&assets.font, tunables.font_size);

    for (text, y) in [
        ("Instructions", SCREEN_HEIGHT / 4.0),
        ("Use Arrow keys to Move", SCREEN_HEIGHT / 2.5),
        ("Press SPACE to Shoot", SCREEN_HEIGHT / 2.0),
        ("Press B to Back", SCREEN_HEIGHT / 1.5),
    ] {
        commands.spawn((
            text_line(font, size, text, TEXT_COLOR, y),
            DespawnOnExit(GameState::Instructions),
        ));
    }
}

/// Every return from a session starts with an empty code and no message.
fn clear_code_entry(mut code: ResMut<SecretCode>, mut message: ResMut<MenuMessage>) {
    *code = SecretCode::default();
    message.0.clear();
}

fn menu_keys(
    mut keys: MessageReader<KeyboardInput>,
    mut code: ResMut<SecretCode>,
    mut message: ResMut<MenuMessage>,
    mut cheats: ResMut<Cheats>,
    mut next: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    for key in keys.read() {
        if key.state != ButtonState::Pressed {
            continue;
        }
        let Some(action) = menu_action(key.key_code, &key.logical_key) else {
            continue;
        };

        match action {
            MenuAction::Start => {
                next.set(GameState::Playing);
                return;
            }
            MenuAction::Instructions => {
                next.set(GameState::Instructions);
                return;
            }
            MenuAction::Quit => {
                info!("quit from menu");
                exit.write(AppExit::Success);
                return;
            }
            MenuAction::Erase => code.backspace(),
            MenuAction::Type(c) => {
                code.push(c);
            }
            MenuAction::Submit => {
                let outcome = code.submit();
                if outcome == CodeOutcome::Cheat {
                    cheats.active = true;
                }
                debug!("code submitted: {:?}", outcome);
                message.0 = outcome.message().to_owned();
            }
        }
    }
}

fn refresh_menu_text(
    code: Res<SecretCode>,
    message: Res<MenuMessage>,
    mut q_code: Query<&mut Text2d, (With<CodeLine>, Without<MessageLine>)>,
    mut q_message: Query<&mut Text2d, (With<MessageLine>, Without<CodeLine>)>,
) {
    if code.is_changed() {
        for mut text in &mut q_code {
            text.0 = format!("{CODE_PROMPT}{}", code.as_str());
        }
    }
    if message.is_changed() {
        for mut text in &mut q_message {
            text.0.clone_from(&message.0);
        }
    }
}

fn instructions_keys(mut keys: MessageReader<KeyboardInput>, mut next: ResMut<NextState<GameState>>) {
    let back = keys
        .read()
        .any(|k| k.state == ButtonState::Pressed && k.key_code == KeyCode::KeyB);
    if back {
        next.set(GameState::Menu);
    }
}
