//! Directional key -> index increment tables

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::keyboard::event::keys;

/// Maps directional key names to signed index increments
///
/// Keys mapped to 0, and keys absent from the table, are not transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyTransitionTable {
    increments: BTreeMap<String, i32>,
}

impl Default for KeyTransitionTable {
    /// Left/Up move back one item, Right/Down move forward one item
    fn default() -> Self {
        Self::empty()
            .with(keys::ARROW_LEFT, -1)
            .with(keys::ARROW_UP, -1)
            .with(keys::ARROW_RIGHT, 1)
            .with(keys::ARROW_DOWN, 1)
    }
}

impl KeyTransitionTable {
    pub fn empty() -> Self {
        Self {
            increments: BTreeMap::new(),
        }
    }

    /// Left/Right only; vertical arrows are inert
    pub fn horizontal() -> Self {
        Self::default().with(keys::ARROW_UP, 0).with(keys::ARROW_DOWN, 0)
    }

    /// Up/Down only; horizontal arrows are inert
    pub fn vertical() -> Self {
        Self::default()
            .with(keys::ARROW_LEFT, 0)
            .with(keys::ARROW_RIGHT, 0)
    }

    pub fn with(mut self, key: impl Into<String>, increment: i32) -> Self {
        self.set(key, increment);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, increment: i32) {
        self.increments.insert(key.into(), increment);
    }

    /// Overlay `other` onto this table, its entries winning
    pub fn merge(&mut self, other: &KeyTransitionTable) {
        for (key, increment) in &other.increments {
            self.increments.insert(key.clone(), *increment);
        }
    }

    /// Non-zero increment for `key`
    pub fn increment(&self, key: &str) -> Option<i32> {
        self.increments.get(key).copied().filter(|inc| *inc != 0)
    }

    /// Keys that trigger a transition
    pub fn active_keys(&self) -> impl Iterator<Item = &str> {
        self.increments
            .iter()
            .filter(|(_, inc)| **inc != 0)
            .map(|(key, _)| key.as_str())
    }
}
