//! Secret-code entry and menu key mapping. No ECS in here.

use bevy::input::keyboard::{Key, KeyCode};
use bevy::prelude::*;

pub const CHEAT_CODE: &str = "cheat";
pub const VALENTINE_CODE: &str = "hehe";

/// Characters typed on the menu since the last submit.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct SecretCode(String);

impl SecretCode {
    /// Only alphabetic characters are kept.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_alphabetic() {
            return false;
        }
        self.0.push(c);
        true
    }

    pub fn backspace(&mut self) {
        self.0.pop();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the buffer and clear it.
    pub fn submit(&mut self) -> CodeOutcome {
        CodeOutcome::of(&std::mem::take(&mut self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeOutcome {
    Cheat,
    Valentine,
    Invalid,
}

impl CodeOutcome {
    /// Case-sensitive.
    pub fn of(code: &str) -> Self {
        match code {
            CHEAT_CODE => Self::Cheat,
            VALENTINE_CODE => Self::Valentine,
            _ => Self::Invalid,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Cheat => "Cheat activated! Unlimited power!",
            Self::Valentine => "Will you be my Valentine? ❤️",
            Self::Invalid => "Invalid code!",
        }
    }
}

/// Feedback line under the code entry. Empty until the first submit.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq, Deref)]
pub struct MenuMessage(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    Instructions,
    Quit,
    Erase,
    Submit,
    Type(char),
}

/// Map one key press on the main menu.
///
/// Command keys win over text entry, so `s`, `i` and `q` never reach the code
/// buffer.
pub fn menu_action(key_code: KeyCode, logical_key: &Key) -> Option<MenuAction> {
    match key_code {
        KeyCode::KeyS => return Some(MenuAction::Start),
        KeyCode::KeyI => return Some(MenuAction::Instructions),
        KeyCode::KeyQ => return Some(MenuAction::Quit),
        KeyCode::Backspace => return Some(MenuAction::Erase),
        KeyCode::Enter | KeyCode::NumpadEnter => return Some(MenuAction::Submit),
        _ => {}
    }

    let Key::Character(s) = logical_key else {
        return None;
    };
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(MenuAction::Type(c)),
        _ => None,
    }
}
