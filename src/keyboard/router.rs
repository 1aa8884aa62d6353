//! Arrow-key routing
//!
//! Turns a directional keydown into a transition of the active id, with
//! wraparound, optionally vetoed by a caller-supplied callback.

use crate::focus::{ActiveElementRegistry, CandidateSet, VisibilityAdapter};
use crate::keyboard::event::KeyboardEvent;
use crate::keyboard::transitions::KeyTransitionTable;

/// What a router callback sees before a transition is committed
#[derive(Debug)]
pub struct ArrowKeyParams<'a> {
    pub key: &'a str,
    pub event: &'a KeyboardEvent,
    /// The id that would become active
    pub active_element_id: &'a str,
    pub increment: i32,
}

/// Callback consulted before each transition.
///
/// `Some(false)` vetoes the transition and leaves the event untouched;
/// `Some(true)` and `None` let it proceed.
pub type ArrowKeyCallback = Box<dyn FnMut(&ArrowKeyParams<'_>) -> Option<bool>>;

/// Maps directional keys to active-id transitions
pub struct ArrowKeyRouter {
    table: KeyTransitionTable,
    callback: Option<ArrowKeyCallback>,
}

impl std::fmt::Debug for ArrowKeyRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrowKeyRouter")
            .field("table", &self.table)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

impl Default for ArrowKeyRouter {
    fn default() -> Self {
        Self::new(KeyTransitionTable::default())
    }
}

impl ArrowKeyRouter {
    pub fn new(table: KeyTransitionTable) -> Self {
        Self {
            table,
            callback: None,
        }
    }

    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ArrowKeyParams<'_>) -> Option<bool> + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn table(&self) -> &KeyTransitionTable {
        &self.table
    }

    /// Whether `key` would be routed
    pub fn handles(&self, key: &str) -> bool {
        self.table.increment(key).is_some()
    }

    /// The id `increment` steps away from `active`, wrapping around.
    ///
    /// With no active id, forward steps count from before the first item
    /// and backward steps from after the last one.
    pub fn next_id<'c>(
        candidates: &'c CandidateSet,
        active: Option<&str>,
        increment: i32,
    ) -> Option<&'c str> {
        if candidates.is_empty() {
            return None;
        }
        let len = candidates.len() as i64;
        let current = match active.and_then(|id| candidates.index_of(id)) {
            Some(index) => index as i64,
            None if increment > 0 => -1,
            None => len,
        };
        let next = (current + i64::from(increment)).rem_euclid(len);
        candidates.get(next as usize)
    }

    /// Route a keydown into `registry`.
    ///
    /// Returns `true` when the key was consumed: the transition committed
    /// and the event's default action was prevented.
    pub fn route<A: VisibilityAdapter>(
        &mut self,
        registry: &mut ActiveElementRegistry<A>,
        event: &mut KeyboardEvent,
    ) -> bool {
        let Some(increment) = self.table.increment(&event.key) else {
            return false;
        };
        let Some(next_id) = Self::next_id(
            registry.candidates(),
            registry.active_element_id(),
            increment,
        )
        .map(str::to_string) else {
            return false;
        };

        if let Some(callback) = self.callback.as_mut() {
            let params = ArrowKeyParams {
                key: &event.key,
                event,
                active_element_id: &next_id,
                increment,
            };
            if callback(&params) == Some(false) {
                log::debug!("transition to {next_id:?} vetoed on {}", event.key);
                return false;
            }
        }

        event.prevent_default();
        registry.set_active_element_id(Some(&next_id));
        true
    }
}
