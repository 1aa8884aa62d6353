// Keyboard navigation and controlled-state core for Orbit components
pub mod config;
pub mod context;
pub mod events;
pub mod focus;
pub mod keyboard;
pub mod state;

pub mod kit; // Widgets built on the navigation core

/// Version of the navigation core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export of common types for convenience
pub mod prelude {
    pub use crate::config::{DispatchConfig, NavigationConfig, Orientation, ScrollConfig};
    pub use crate::context::ContextProvider;
    pub use crate::events::{Announcement, Announcer, Politeness};
    pub use crate::focus::{
        use_ids, ActiveElementRegistry, CandidateSet, IdGenerator, IdMemo, Identified,
        MaybeIdentified, NoopAdapter, RecordingAdapter, ScrollAlignment, ScrollBehavior,
        ScrollIntoView, VisibilityAdapter,
    };
    pub use crate::keyboard::{
        ArrowKeyNavigation, ArrowKeyParams, ArrowKeyRouter, DispatchOptions, KeyHandlers, KeyMap,
        KeyTransitionTable, KeyboardEvent, Modifiers,
    };
    pub use crate::state::{SetValue, StateSetter, SyncState, ValueBridge, ValueSlot};
    pub use crate::Error;
}

/// Errors that can occur in the navigation core
///
/// Only programmer errors surface here. Stale ids, missing scroll targets
/// and empty candidate sets are corrected silently.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Duplicate id in candidate set: {id}")]
    DuplicateId { id: String },

    #[error("No provider for {0} in the context tree")]
    MissingProvider(&'static str),

    #[error("Unknown id: {id}")]
    UnknownId { id: String },

    #[error("Cannot push an external value into an uncontrolled bridge")]
    ControlModeSwitch,

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Lock error: {0}")]
    Lock(String),
}
