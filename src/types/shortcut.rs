use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ShortcutError;

/// A physical key as seen by the shortcut layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable character. Letters are stored upper-case.
    Char(char),
    /// Function key `F1`..`F12`.
    Function(u8),
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
}

impl Key {
    /// Builds a character key, folding letters to upper case.
    pub fn char(c: char) -> Self {
        Key::Char(c.to_ascii_uppercase())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Function(n) => write!(f, "F{}", n),
            Key::Left => write!(f, "Left"),
            Key::Right => write!(f, "Right"),
            Key::Up => write!(f, "Up"),
            Key::Down => write!(f, "Down"),
            Key::Enter => write!(f, "Enter"),
            Key::Escape => write!(f, "Escape"),
        }
    }
}

impl FromStr for Key {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Left" | "ArrowLeft" => return Ok(Key::Left),
            "Right" | "ArrowRight" => return Ok(Key::Right),
            "Up" | "ArrowUp" => return Ok(Key::Up),
            "Down" | "ArrowDown" => return Ok(Key::Down),
            "Enter" => return Ok(Key::Enter),
            "Escape" | "Esc" => return Ok(Key::Escape),
            _ => {}
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => return Ok(Key::char(c)),
            _ => {}
        }

        if let Some(n) = s.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
            if (1..=12).contains(&n) {
                return Ok(Key::Function(n));
            }
        }

        Err(ShortcutError::InvalidKeys(s.to_string()))
    }
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { ctrl: false, alt: false, shift: false, meta: false };
    pub const CTRL: Modifiers = Modifiers { ctrl: true, alt: false, shift: false, meta: false };
    pub const ALT: Modifiers = Modifiers { ctrl: false, alt: true, shift: false, meta: false };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Builds modifiers from raw key state, treating Cmd as Ctrl on macOS.
    pub fn from_platform(ctrl: bool, alt: bool, shift: bool, meta: bool) -> Self {
        if cfg!(target_os = "macos") {
            Self { ctrl: ctrl || meta, alt, shift, meta: false }
        } else {
            Self { ctrl, alt, shift, meta }
        }
    }
}

/// A key together with the exact set of modifiers pressed with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Parses a combination such as `"Ctrl+T"`, `"Alt+Left"` or `"F5"`.
    pub fn parse(keys: &str) -> Result<Self, ShortcutError> {
        let keys = keys.trim();
        if keys.is_empty() {
            return Err(ShortcutError::InvalidKeys("Keys cannot be empty".to_string()));
        }

        let parts: Vec<&str> = keys.split('+').map(str::trim).collect();
        let (key_part, modifier_parts) = match parts.split_last() {
            Some((last, rest)) if !last.is_empty() => (*last, rest),
            _ => return Err(ShortcutError::InvalidKeys(keys.to_string())),
        };

        let mut modifiers = Modifiers::NONE;
        for part in modifier_parts {
            match *part {
                "Ctrl" | "Control" => modifiers.ctrl = true,
                "Alt" | "Option" => modifiers.alt = true,
                "Shift" => modifiers.shift = true,
                "Meta" | "Cmd" | "Super" => modifiers.meta = true,
                other => return Err(ShortcutError::UnknownModifier(other.to_string())),
            }
        }

        Ok(Self::new(key_part.parse()?, modifiers))
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.modifiers.alt {
            write!(f, "Alt+")?;
        }
        if self.modifiers.shift {
            write!(f, "Shift+")?;
        }
        if self.modifiers.meta {
            write!(f, "Meta+")?;
        }
        write!(f, "{}", self.key)
    }
}
