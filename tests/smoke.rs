mod common;

use bevy::prelude::*;
use space_shooter::common::state::GameState;
use space_shooter::plugins::menu::{CodeLine, MessageLine};
use space_shooter::plugins::player::Player;
use space_shooter::plugins::session::PlaySession;
use space_shooter::plugins::world::Star;

#[test]
fn boots_into_menu_and_ticks() {
    let mut app = common::app_headless();

    common::tick(&mut app, 3);

    assert_eq!(common::state(&app), GameState::Menu);
    let code_lines = app.world_mut().query::<&CodeLine>().iter(app.world()).count();
    let message_lines = app.world_mut().query::<&MessageLine>().iter(app.world()).count();
    assert_eq!((code_lines, message_lines), (1, 1));
}

#[test]
fn s_starts_a_session_with_ship_and_stars() {
    let mut app = common::app_headless();

    common::start_session(&mut app);

    let players = app.world_mut().query::<&Player>().iter(app.world()).count();
    let stars = app.world_mut().query::<&Star>().iter(app.world()).count();
    assert_eq!(players, 1);
    assert_eq!(stars, 20);
    assert!(app.world().contains_resource::<PlaySession>());

    // Menu screen is gone.
    let code_lines = app.world_mut().query::<&CodeLine>().iter(app.world()).count();
    assert_eq!(code_lines, 0);
}

#[test]
fn instructions_and_back() {
    let mut app = common::app_headless();
    common::tick(&mut app, 1);

    common::press(&mut app, KeyCode::KeyI, "i");
    common::tick(&mut app, 2);
    assert_eq!(common::state(&app), GameState::Instructions);

    common::press(&mut app, KeyCode::KeyB, "b");
    common::tick(&mut app, 2);
    assert_eq!(common::state(&app), GameState::Menu);
}

#[test]
fn q_exits_cleanly() {
    let mut app = common::app_headless();
    common::tick(&mut app, 1);

    common::press(&mut app, KeyCode::KeyQ, "q");
    common::tick(&mut app, 1);

    assert_eq!(app.should_exit(), Some(AppExit::Success));
}
