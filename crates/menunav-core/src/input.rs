//! Normalized keyboard and mouse events.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn ctrl_shift() -> Self {
        Self {
            shift: true,
            ctrl: true,
            ..Self::NONE
        }
    }

    /// True when no modifier is held.
    pub fn is_empty(&self) -> bool {
        !(self.shift || self.ctrl || self.alt || self.meta)
    }
}

/// Keys the engine reacts to. Everything else arrives as `Char` or `Other`
/// and is left for the screen to handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Tab,
    Enter,
    Escape,
    Char(char),
    Other(String),
}

impl Key {
    /// Parse a key name as used in scripts ("Up", "Tab", "a", ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Up" | "ArrowUp" => Key::Up,
            "Down" | "ArrowDown" => Key::Down,
            "Left" | "ArrowLeft" => Key::Left,
            "Right" | "ArrowRight" => Key::Right,
            "Tab" => Key::Tab,
            "Enter" | "Return" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(name.to_string()),
                }
            }
        }
    }
}

/// A key press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Auto-repeat while the key is held. Handled like a fresh press.
    #[serde(default)]
    pub is_repeat: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
            is_repeat: false,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            is_repeat: false,
        }
    }
}

/// A mouse event: pointer position plus the button transitions of this frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseEvent {
    pub position: Point,
    #[serde(default)]
    pub left_click: bool,
    #[serde(default)]
    pub left_double_click: bool,
    #[serde(default)]
    pub right_click: bool,
    #[serde(default)]
    pub middle_click: bool,
    /// Left button is being held (drag).
    #[serde(default)]
    pub left_held: bool,
    #[serde(default)]
    pub wheel_delta: f64,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Pointer moved, no buttons.
    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            left_click: false,
            left_double_click: false,
            right_click: false,
            middle_click: false,
            left_held: false,
            wheel_delta: 0.0,
            modifiers: Modifiers::NONE,
        }
    }

    /// Left click at the given position.
    pub fn click(x: f64, y: f64) -> Self {
        Self {
            left_click: true,
            ..Self::moved(x, y)
        }
    }

    /// Pointer moved with the left button held.
    pub fn drag(x: f64, y: f64, modifiers: Modifiers) -> Self {
        Self {
            left_held: true,
            modifiers,
            ..Self::moved(x, y)
        }
    }
}
