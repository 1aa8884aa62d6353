//! Keyboard event model
//!
//! A surface-neutral keydown: the logical `key`, the physical `code`,
//! modifier flags, and the two propagation controls handlers may flip.

use serde::{Deserialize, Serialize};

/// Key names used by the navigation core
pub mod keys {
    pub const ARROW_LEFT: &str = "ArrowLeft";
    pub const ARROW_RIGHT: &str = "ArrowRight";
    pub const ARROW_UP: &str = "ArrowUp";
    pub const ARROW_DOWN: &str = "ArrowDown";
    pub const HOME: &str = "Home";
    pub const END: &str = "End";
    pub const ENTER: &str = "Enter";
    pub const ESCAPE: &str = "Escape";
    pub const TAB: &str = "Tab";
    /// `code` of the space bar (its `key` is a literal space)
    pub const SPACE: &str = "Space";
}

/// Modifier keys held during a key event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// A keydown delivered by the rendering surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// Logical key, e.g. `ArrowDown`, `a`, `" "`
    pub key: String,
    /// Physical key, e.g. `ArrowDown`, `KeyA`, `Space`
    pub code: String,
    pub modifiers: Modifiers,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl KeyboardEvent {
    /// Event for `key`, with `code` derived the way browsers report it
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let code = code_for_key(&key);
        Self {
            key,
            code,
            modifiers: Modifiers::NONE,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn with_control(mut self) -> Self {
        self.modifiers.control = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Suppress the surface's default action for this key
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop the event from reaching ancestor handlers
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

pub(crate) fn code_for_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(' '), None) => keys::SPACE.to_string(),
        (Some(c), None) if c.is_ascii_alphabetic() => format!("Key{}", c.to_ascii_uppercase()),
        (Some(c), None) if c.is_ascii_digit() => format!("Digit{c}"),
        _ => key.to_string(),
    }
}
