//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-action mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::InputAction;

pub mod sampler;
pub use sampler::InputSampler;

/// Alternative keys one action may be bound to.
pub const MAX_ALTERNATIVES: usize = 4;

type Keys = ArrayVec<KeyCode, MAX_ALTERNATIVES>;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// A key bound to a game action.
    Game(InputAction),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into logical game actions.
#[derive(Clone, Debug)]
pub struct KeyMap {
    bindings: Vec<(InputAction, Keys)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let c = KeyCode::Char;
        Self {
            bindings: vec![
                (InputAction::MoveUp, keys_of(&[c('i')])),
                (InputAction::MoveLeft, keys_of(&[c('j')])),
                (InputAction::MoveDown, keys_of(&[c('k')])),
                (InputAction::MoveRight, keys_of(&[c('l')])),
                (InputAction::ToggleInventory, keys_of(&[c('f')])),
                (InputAction::SelectPrev, keys_of(&[KeyCode::Up, c('w')])),
                (InputAction::SelectNext, keys_of(&[KeyCode::Down, c('s')])),
            ],
        }
    }
}

fn keys_of(codes: &[KeyCode]) -> Keys {
    codes.iter().take(MAX_ALTERNATIVES).cloned().collect()
}

impl KeyMap {
    /// Adds an alternative key for `action`. Returns `false` when the action
    /// already has [`MAX_ALTERNATIVES`] keys.
    pub fn bind(&mut self, action: InputAction, key: KeyCode) -> bool {
        let key = normalize(key);
        match self.bindings.iter_mut().find(|(a, _)| *a == action) {
            Some((_, keys)) => keys.try_push(key).is_ok(),
            None => {
                self.bindings.push((action, keys_of(&[key])));
                true
            }
        }
    }

    /// First action bound to `key`, ignoring letter case.
    pub fn action_for(&self, key: KeyCode) -> Option<InputAction> {
        let key = normalize(key);
        self.bindings
            .iter()
            .find(|(_, keys)| keys.contains(&key))
            .map(|(action, _)| *action)
    }

    /// Converts a raw key event into a higher-level command.
    pub fn translate(&self, key: &KeyEvent) -> KeyAction {
        if is_quit(key) {
            return KeyAction::Quit;
        }
        self.action_for(key.code)
            .map_or(KeyAction::None, KeyAction::Game)
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn normalize(key: KeyCode) -> KeyCode {
    match key {
        KeyCode::Char(ch) => KeyCode::Char(ch.to_ascii_lowercase()),
        other => other,
    }
}
