//! Value state for widgets with a `value`/`on_change` contract
//!
//! 1. `SyncState<V>` - local state whose latest value is readable synchronously
//! 2. `ValueBridge<V>` - controlled or uncontrolled value, fixed at construction

pub mod bridge;
pub mod sync;

pub use bridge::{ValueBridge, ValueSlot};
pub use sync::{use_sync_state, ChangeHandler, SetValue, StateSetter, SyncState};
