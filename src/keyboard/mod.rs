//! Keyboard input for navigable widgets
//!
//! The keyboard layer provides:
//! - A surface-neutral keydown model with propagation controls
//! - Key transition tables mapping arrows to index increments
//! - The arrow-key router, with wraparound and caller veto
//! - A modifier-aware key map for the remaining bindings (Enter, Escape, Home...)

pub mod event;
pub mod keymap;
pub mod navigation;
pub mod router;
pub mod transitions;

pub use event::{keys, KeyboardEvent, Modifiers};
pub use keymap::{compound_name, DispatchOptions, KeyHandler, KeyHandlers, KeyMap};
pub use navigation::ArrowKeyNavigation;
pub use router::{ArrowKeyCallback, ArrowKeyParams, ArrowKeyRouter};
pub use transitions::KeyTransitionTable;
