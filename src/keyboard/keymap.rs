//! Modifier-aware key routing
//!
//! Bindings are keyed by compound names: the bare `code` (`ArrowDown`) or a
//! modifier prefix plus the code (`ShiftArrowDown`, `ControlKeyA`,
//! `AltEnter`). A keydown resolves to at most one binding, checked in a
//! fixed order: Shift, Control, Alt, then the bare code.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::keyboard::event::KeyboardEvent;

/// Propagation side effects applied when a binding matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchOptions {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: false,
        }
    }
}

impl DispatchOptions {
    /// Leave the event untouched on a match
    pub const PASSIVE: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };

    fn apply(self, event: &mut KeyboardEvent) {
        if self.prevent_default {
            event.prevent_default();
        }
        if self.stop_propagation {
            event.stop_propagation();
        }
    }
}

/// Compound binding name for a modifier prefix and a key code
pub fn compound_name(modifier: &str, code: &str) -> String {
    format!("{modifier}{code}")
}

/// Key bindings resolved by compound name
#[derive(Clone)]
pub struct KeyMap<H> {
    bindings: HashMap<String, H>,
}

impl<H> std::fmt::Debug for KeyMap<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("KeyMap").field("bindings", &names).finish()
    }
}

impl<H> Default for KeyMap<H> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<H> KeyMap<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, name: impl Into<String>, handler: H) -> Self {
        self.insert(name, handler);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, handler: H) -> Option<H> {
        self.bindings.insert(name.into(), handler)
    }

    pub fn remove(&mut self, name: &str) -> Option<H> {
        self.bindings.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Name of the binding `event` resolves to
    pub fn matching_name(&self, event: &KeyboardEvent) -> Option<String> {
        let code = event.code.as_str();
        let prefixed = [
            (event.modifiers.shift, "Shift"),
            (event.modifiers.control, "Control"),
            (event.modifiers.alt, "Alt"),
        ];
        prefixed
            .iter()
            .filter(|(held, _)| *held)
            .map(|(_, modifier)| compound_name(modifier, code))
            .find(|name| self.bindings.contains_key(name))
            .or_else(|| self.contains(code).then(|| code.to_string()))
    }

    pub fn resolve(&self, event: &KeyboardEvent) -> Option<&H> {
        let name = self.matching_name(event)?;
        self.bindings.get(&name)
    }

    /// Resolve `event` and, on a match, apply `options` to it
    pub fn route(&self, event: &mut KeyboardEvent, options: DispatchOptions) -> Option<&H> {
        let name = self.matching_name(event)?;
        log::trace!("key {} routed to binding {name}", event.code);
        options.apply(event);
        self.bindings.get(&name)
    }
}

/// Boxed keydown handler
pub type KeyHandler = Box<dyn FnMut(&mut KeyboardEvent)>;

/// Key bindings that run closures
pub type KeyHandlers = KeyMap<KeyHandler>;

impl KeyMap<KeyHandler> {
    pub fn on<F>(self, name: impl Into<String>, handler: F) -> Self
    where
        F: FnMut(&mut KeyboardEvent) + 'static,
    {
        self.bind(name, Box::new(handler))
    }

    /// Run the single matching handler, if any.
    ///
    /// `options` only touch the event when a handler matched.
    pub fn dispatch(&mut self, event: &mut KeyboardEvent, options: DispatchOptions) -> bool {
        let Some(name) = self.matching_name(event) else {
            return false;
        };
        options.apply(event);
        match self.bindings.get_mut(&name) {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}
