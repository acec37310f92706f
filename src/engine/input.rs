//! Raw key input.
//!
//! Physical keyboards and on-screen keys both deliver a key name string.
//! `KeyInput::parse` maps those onto the three things the engine cares
//! about; anything else is `Ignored`.

use serde::{Deserialize, Serialize};

/// Label of the on-screen backspace key.
pub const BACKSPACE_GLYPH: &str = "⌫";

/// A parsed key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyInput {
    /// A single letter, already lowercased.
    Letter(char),
    /// Submit the current row.
    Enter,
    /// Erase the last letter of the current row.
    Backspace,
    /// Anything else (modifiers, digits, multi-char names).
    Ignored,
}

impl KeyInput {
    /// Parse a key name, case-insensitively.
    ///
    /// ```
    /// use wordle_plus::engine::KeyInput;
    ///
    /// assert_eq!(KeyInput::parse("Enter"), KeyInput::Enter);
    /// assert_eq!(KeyInput::parse("⌫"), KeyInput::Backspace);
    /// assert_eq!(KeyInput::parse("Q"), KeyInput::Letter('q'));
    /// assert_eq!(KeyInput::parse("Shift"), KeyInput::Ignored);
    /// ```
    #[must_use]
    pub fn parse(key: &str) -> Self {
        let key = key.trim();
        if key.eq_ignore_ascii_case("enter") {
            return KeyInput::Enter;
        }
        if key.eq_ignore_ascii_case("backspace") || key == BACKSPACE_GLYPH {
            return KeyInput::Backspace;
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => KeyInput::from(c),
            _ => KeyInput::Ignored,
        }
    }
}

impl From<char> for KeyInput {
    fn from(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            KeyInput::Letter(c.to_ascii_lowercase())
        } else {
            KeyInput::Ignored
        }
    }
}

impl From<&str> for KeyInput {
    fn from(key: &str) -> Self {
        KeyInput::parse(key)
    }
}
