//! Local state with a synchronous mirror
//!
//! Every setter handle reads the one shared cell, so a functional update
//! issued right after another one sees its result instead of a value
//! captured earlier.

use std::cell::RefCell;
use std::rc::Rc;

/// Change notifier invoked after each update
pub type ChangeHandler<V> = Rc<dyn Fn(&V)>;

/// The argument of a setter: a value or a function of the latest value
pub enum SetValue<V> {
    Value(V),
    Update(Box<dyn FnOnce(&V) -> V>),
}

impl<V> SetValue<V> {
    pub fn update<F>(f: F) -> Self
    where
        F: FnOnce(&V) -> V + 'static,
    {
        SetValue::Update(Box::new(f))
    }

    fn resolve(self, latest: &V) -> V {
        match self {
            SetValue::Value(value) => value,
            SetValue::Update(f) => f(latest),
        }
    }
}

impl<V> From<V> for SetValue<V> {
    fn from(value: V) -> Self {
        SetValue::Value(value)
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for SetValue<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
            SetValue::Update(_) => f.write_str("Update(..)"),
        }
    }
}

struct SyncInner<V> {
    value: RefCell<V>,
    on_change: Option<ChangeHandler<V>>,
}

/// State cell whose latest value is always readable
pub struct SyncState<V> {
    inner: Rc<SyncInner<V>>,
}

impl<V> Clone for SyncState<V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for SyncState<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncState")
            .field("value", &self.inner.value)
            .field("on_change", &self.inner.on_change.is_some())
            .finish()
    }
}

impl<V: Clone + 'static> SyncState<V> {
    pub fn new(initial: V) -> Self {
        Self::from_parts(initial, None)
    }

    pub fn with_on_change<F>(initial: V, on_change: F) -> Self
    where
        F: Fn(&V) + 'static,
    {
        Self::from_parts(initial, Some(Rc::new(on_change)))
    }

    pub(crate) fn from_parts(initial: V, on_change: Option<ChangeHandler<V>>) -> Self {
        Self {
            inner: Rc::new(SyncInner {
                value: RefCell::new(initial),
                on_change,
            }),
        }
    }

    /// The latest committed value
    pub fn get(&self) -> V {
        self.inner.value.borrow().clone()
    }

    /// Borrow the latest value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Store the next value, then notify.
    ///
    /// Functional updates receive the latest value; the notifier runs after
    /// the cell is updated and may read it.
    pub fn set_value(&self, next: impl Into<SetValue<V>>) {
        let value = next.into().resolve(&self.inner.value.borrow());
        self.commit(value);
    }

    pub fn set(&self, value: V) {
        self.commit(value);
    }

    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&V) -> V,
    {
        let value = f(&self.inner.value.borrow());
        self.commit(value);
    }

    /// Replace the value without notifying
    pub(crate) fn replace_silently(&self, value: V) {
        *self.inner.value.borrow_mut() = value;
    }

    /// A cloneable setter sharing this state
    pub fn setter(&self) -> StateSetter<V> {
        StateSetter {
            state: self.clone(),
        }
    }

    fn commit(&self, value: V) {
        *self.inner.value.borrow_mut() = value;
        if let Some(on_change) = &self.inner.on_change {
            let current = self.get();
            on_change(&current);
        }
    }
}

/// Setter half of [`use_sync_state`]
pub struct StateSetter<V> {
    state: SyncState<V>,
}

impl<V> Clone for StateSetter<V> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for StateSetter<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StateSetter").field(&self.state).finish()
    }
}

impl<V: Clone + 'static> StateSetter<V> {
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

    /// The latest value, as seen by the mirror
    pub fn current(&self) -> V {
        self.state.get()
    }
}

/// Create local state: the current value and a setter that funnels every
/// update through `on_change`
pub fn use_sync_state<V: Clone + 'static>(
    initial: V,
    on_change: Option<ChangeHandler<V>>,
) -> (V, StateSetter<V>) {
    let state = SyncState::from_parts(initial, on_change);
    (state.get(), state.setter())
}
