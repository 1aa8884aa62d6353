//! Active-element tracking for keyboard navigation
//!
//! - `CandidateSet` - the ordered, unique ids of one navigation context
//! - `ActiveElementRegistry` - which candidate is highlighted, kept valid as the set changes
//! - `VisibilityAdapter` - scroll side effects on whatever surface renders the candidates
//! - `use_ids` / `IdGenerator` - id synthesis for collections without identifiers

pub mod adapter;
pub mod candidates;
pub mod ids;
pub mod registry;

#[cfg(feature = "web")]
pub use adapter::DomAdapter;
pub use adapter::{
    NoopAdapter, RecordingAdapter, ScrollAlignment, ScrollBehavior, ScrollIntoView,
    VisibilityAdapter,
};
pub use candidates::CandidateSet;
pub use ids::{use_ids, IdGenerator, IdMemo, Identified, MaybeIdentified};
pub use registry::ActiveElementRegistry;
