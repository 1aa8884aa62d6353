//! Controlled/uncontrolled value bridging
//!
//! A widget with a `value`/`on_change` contract is either driven by its
//! parent or keeps its own state. The mode is chosen once, when the bridge
//! is built, and every mutation goes out through the change notifier.

use std::rc::Rc;

use crate::state::sync::{ChangeHandler, SetValue, StateSetter, SyncState};
use crate::Error;

/// Where a widget's value lives
pub enum ValueSlot<V> {
    /// The parent owns the value and learns about changes via `on_change`
    Controlled {
        value: V,
        on_change: ChangeHandler<V>,
    },
    /// The widget owns the value, seeded from `initial`
    Uncontrolled {
        initial: V,
        on_change: Option<ChangeHandler<V>>,
    },
}

impl<V> ValueSlot<V> {
    pub fn controlled<F>(value: V, on_change: F) -> Self
    where
        F: Fn(&V) + 'static,
    {
        ValueSlot::Controlled {
            value,
            on_change: Rc::new(on_change),
        }
    }

    pub fn uncontrolled(initial: V) -> Self {
        ValueSlot::Uncontrolled {
            initial,
            on_change: None,
        }
    }

    pub fn uncontrolled_with<F>(initial: V, on_change: F) -> Self
    where
        F: Fn(&V) + 'static,
    {
        ValueSlot::Uncontrolled {
            initial,
            on_change: Some(Rc::new(on_change)),
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, ValueSlot::Controlled { .. })
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for ValueSlot<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSlot::Controlled { value, .. } => {
                f.debug_struct("Controlled").field("value", value).finish()
            }
            ValueSlot::Uncontrolled { initial, on_change } => f
                .debug_struct("Uncontrolled")
                .field("initial", initial)
                .field("on_change", &on_change.is_some())
                .finish(),
        }
    }
}

/// A widget's value, resolved from a [`ValueSlot`]
///
/// In controlled mode the bridge mirrors the parent's value so that rapid
/// functional updates compose, and [`receive`](Self::receive) takes the
/// parent's next value. In uncontrolled mode it is plain local state.
#[derive(Debug)]
pub struct ValueBridge<V> {
    controlled: bool,
    state: SyncState<V>,
}

impl<V: Clone + 'static> ValueBridge<V> {
    pub fn new(slot: ValueSlot<V>) -> Self {
        match slot {
            ValueSlot::Controlled { value, on_change } => Self {
                controlled: true,
                state: SyncState::from_parts(value, Some(on_change)),
            },
            ValueSlot::Uncontrolled { initial, on_change } => Self {
                controlled: false,
                state: SyncState::from_parts(initial, on_change),
            },
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// The latest value
    pub fn value(&self) -> V {
        self.state.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        self.state.with(f)
    }

    pub fn set_value(&self, next: impl Into<SetValue<V>>) {
        self.state.set_value(next);
    }

    pub fn set(&self, value: V) {
        self.state.set(value);
    }

    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&V) -> V,
    {
        self.state.update(f);
    }

    pub fn setter(&self) -> StateSetter<V> {
        self.state.setter()
    }

    /// Take the parent's current value.
    ///
    /// Only meaningful for controlled bridges; an uncontrolled bridge cannot
    /// be switched to controlled mode after construction.
    pub fn receive(&self, value: V) -> Result<(), Error> {
        if !self.controlled {
            return Err(Error::ControlModeSwitch);
        }
        self.state.replace_silently(value);
        Ok(())
    }
}
