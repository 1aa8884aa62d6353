//! Context passing for widget trees
//!
//! Shared collaborators (the announcer, a design system's navigation
//! preset) are provided once near the root and looked up by type from any
//! descendant. A widget that cannot work without a collaborator uses
//! [`ContextProvider::require`], which fails loudly when no ancestor
//! provided it.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};

use crate::Error;

/// A type-erased value that can be stored in a context
trait ContextValue: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Send + Sync + 'static> ContextValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Provider for widget context
#[derive(Clone, Default)]
pub struct ContextProvider {
    /// Parent context provider
    parent: Option<Box<ContextProvider>>,
    values: Arc<RwLock<HashMap<TypeId, Box<dyn ContextValue>>>>,
}

impl Debug for ContextProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextProvider")
            .field("parent", &self.parent.is_some())
            .field(
                "values",
                &format!(
                    "[{} values]",
                    self.values.read().map(|v| v.len()).unwrap_or(0)
                ),
            )
            .finish()
    }
}

impl ContextProvider {
    /// Create a root context provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context provider below `parent`
    pub fn with_parent(parent: ContextProvider) -> Self {
        Self {
            parent: Some(Box::new(parent)),
            values: Arc::default(),
        }
    }

    /// Provide a value to this context and its descendants
    pub fn provide<T: Clone + Send + Sync + 'static>(&self, value: T) -> Result<(), Error> {
        let mut values = self
            .values
            .write()
            .map_err(|e| {
                log::warn!("context values poisoned: {e}");
                Error::Lock(format!("Failed to acquire context write lock: {e}"))
            })?;
        values.insert(TypeId::of::<T>(), Box::new(value));
        Ok(())
    }

    /// Look a value up here, then in ancestors
    pub fn consume<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
        let found = self.values.read().ok().and_then(|values| {
            values
                .get(&TypeId::of::<T>())
                .and_then(|value| (**value).as_any().downcast_ref::<T>().cloned())
        });

        match (found, &self.parent) {
            (Some(value), _) => Some(value),
            (None, Some(parent)) => parent.consume::<T>(),
            (None, None) => None,
        }
    }

    /// Like [`consume`](Self::consume), but a missing provider is an error
    pub fn require<T: Clone + Send + Sync + 'static>(&self) -> Result<T, Error> {
        self.consume::<T>()
            .ok_or(Error::MissingProvider(std::any::type_name::<T>()))
    }

    /// Check if a type is provided here or in an ancestor
    pub fn has<T: 'static>(&self) -> bool {
        let here = self
            .values
            .read()
            .map(|values| values.contains_key(&TypeId::of::<T>()))
            .unwrap_or(false);

        here || self.parent.as_ref().is_some_and(|parent| parent.has::<T>())
    }

    /// Remove a value from this context (ancestors are untouched)
    pub fn remove<T: 'static>(&self) -> bool {
        self.values
            .write()
            .map(|mut values| values.remove(&TypeId::of::<T>()).is_some())
            .unwrap_or(false)
    }
}
