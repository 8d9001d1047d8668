//! Terminal key bindings
//!
//! One table maps keys to logical [`Input`]s. Which half of the table
//! applies depends on whether the end-of-round overlay is showing: the
//! overlay only offers "play again" and "quit".

use crate::core::Letter;
use crate::game::Input;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rustc_hash::FxHashMap;

/// Which part of the screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Board,
    Overlay,
}

const BOARD_BINDINGS: &[(KeyCode, Input)] = &[
    (KeyCode::Enter, Input::Enter),
    (KeyCode::Backspace, Input::Backspace),
    (KeyCode::Delete, Input::Backspace),
    (KeyCode::Esc, Input::Quit),
];

const OVERLAY_BINDINGS: &[(KeyCode, Input)] = &[
    (KeyCode::Enter, Input::PlayAgain),
    (KeyCode::Char(' '), Input::PlayAgain),
    (KeyCode::Char('n'), Input::PlayAgain),
    (KeyCode::Char('q'), Input::Quit),
    (KeyCode::Esc, Input::Quit),
];

/// Lookup table from key presses to inputs
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: FxHashMap<(Layer, KeyCode), Input>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMap {
    /// The standard bindings, built once at startup
    #[must_use]
    pub fn new() -> Self {
        let mut bindings = FxHashMap::default();

        for letter in Letter::all() {
            let input = Input::Letter(letter);
            bindings.insert((Layer::Board, KeyCode::Char(letter.as_char())), input);
            bindings.insert((Layer::Board, KeyCode::Char(letter.label())), input);
        }
        for &(code, input) in BOARD_BINDINGS {
            bindings.insert((Layer::Board, code), input);
        }
        for &(code, input) in OVERLAY_BINDINGS {
            bindings.insert((Layer::Overlay, code), input);
        }

        Self { bindings }
    }

    /// Resolve a key press; Ctrl-C always quits
    #[must_use]
    pub fn resolve(&self, key: KeyEvent, layer: Layer) -> Option<Input> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c')).then_some(Input::Quit);
        }
        self.bindings.get(&(layer, key.code)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_either_case() {
        let keys = KeyMap::new();
        let a = Letter::from_char('a').unwrap();
        assert_eq!(
            keys.resolve(press(KeyCode::Char('a')), Layer::Board),
            Some(Input::Letter(a))
        );
        assert_eq!(
            keys.resolve(
                KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT),
                Layer::Board
            ),
            Some(Input::Letter(a))
        );
    }

    #[test]
    fn board_controls() {
        let keys = KeyMap::new();
        assert_eq!(keys.resolve(press(KeyCode::Enter), Layer::Board), Some(Input::Enter));
        assert_eq!(
            keys.resolve(press(KeyCode::Backspace), Layer::Board),
            Some(Input::Backspace)
        );
        assert_eq!(keys.resolve(press(KeyCode::Esc), Layer::Board), Some(Input::Quit));
        assert_eq!(keys.resolve(press(KeyCode::Char('1')), Layer::Board), None);
        assert_eq!(keys.resolve(press(KeyCode::Tab), Layer::Board), None);
    }

    #[test]
    fn overlay_offers_play_again_and_quit_only() {
        let keys = KeyMap::new();
        assert_eq!(
            keys.resolve(press(KeyCode::Enter), Layer::Overlay),
            Some(Input::PlayAgain)
        );
        assert_eq!(
            keys.resolve(press(KeyCode::Char('q')), Layer::Overlay),
            Some(Input::Quit)
        );
        assert_eq!(keys.resolve(press(KeyCode::Char('a')), Layer::Overlay), None);
        assert_eq!(keys.resolve(press(KeyCode::Backspace), Layer::Overlay), None);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let keys = KeyMap::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(keys.resolve(ctrl_c, Layer::Board), Some(Input::Quit));
        assert_eq!(keys.resolve(ctrl_c, Layer::Overlay), Some(Input::Quit));

        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(keys.resolve(ctrl_a, Layer::Board), None);
    }
}
