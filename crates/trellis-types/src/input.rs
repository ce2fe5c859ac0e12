//! Toolkit-agnostic keyboard event types.
//!
//! Every windowing driver maps its native key input to these types. Widgets
//! never see raw platform input.

use serde::{Deserialize, Serialize};

/// Named keys that carry no printable text of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyName {
    Escape,
    Return,
    Tab,
    Backspace,
    Delete,
    Insert,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Space,
    /// A key whose meaning is carried entirely by `KeyEvent::text`.
    Character,
}

/// Modifier keys held while the event was generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub super_key: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        super_key: false,
    };

    /// Whether any modifier other than shift is held.
    ///
    /// Shift alone still produces text, so editors treat it as plain typing.
    pub fn is_command(&self) -> bool {
        self.control || self.alt || self.super_key
    }
}

/// A single key-press event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Which key was pressed.
    pub name: KeyName,
    /// Text produced by the key press, if any.
    #[serde(default)]
    pub text: Option<String>,
    /// Modifier state at the time of the press.
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A named key with no text and no modifiers.
    pub fn named(name: KeyName) -> Self {
        Self {
            name,
            text: None,
            modifiers: Modifiers::NONE,
        }
    }

    /// A printable character.
    pub fn character(ch: char) -> Self {
        let name = if ch == ' ' {
            KeyName::Space
        } else {
            KeyName::Character
        };
        Self {
            name,
            text: Some(ch.to_string()),
            modifiers: Modifiers::NONE,
        }
    }

    /// Replace the modifier state.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Text this event would insert into an editor, if any.
    pub fn printable(&self) -> Option<&str> {
        if self.modifiers.is_command() {
            return None;
        }
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}
