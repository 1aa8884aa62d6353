//! Active-element tracking for one navigation context
//!
//! The registry remembers which candidate is keyboard-highlighted,
//! independently of DOM focus. Its invariant: a non-null active id is
//! always a member of the current candidate set.

use crate::focus::adapter::{NoopAdapter, ScrollIntoView, VisibilityAdapter};
use crate::focus::candidates::CandidateSet;
use crate::Error;

/// Tracks the active id among an ordered candidate set
///
/// Owned by exactly one widget instance; never shared between instances.
#[derive(Debug, Clone)]
pub struct ActiveElementRegistry<A = NoopAdapter> {
    candidates: CandidateSet,
    active: Option<String>,
    scroll: ScrollIntoView,
    adapter: A,
}

impl ActiveElementRegistry<NoopAdapter> {
    /// Create a registry with no rendering surface attached
    pub fn new(candidates: CandidateSet, default_active: Option<&str>) -> Self {
        Self::with_adapter(candidates, default_active, NoopAdapter)
    }
}

impl<A: VisibilityAdapter> ActiveElementRegistry<A> {
    /// Create a registry that forwards scroll requests to `adapter`
    ///
    /// A default id outside the set is corrected to the first candidate.
    pub fn with_adapter(candidates: CandidateSet, default_active: Option<&str>, adapter: A) -> Self {
        let mut registry = Self {
            candidates,
            active: default_active.map(str::to_string),
            scroll: ScrollIntoView::default(),
            adapter,
        };
        registry.correct_active();
        registry
    }

    /// Override how scroll requests are issued
    pub fn with_scroll(mut self, scroll: ScrollIntoView) -> Self {
        self.scroll = scroll;
        self
    }

    /// The currently active id, if any
    pub fn active_element_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Index of the active id within the candidate set
    pub fn active_index(&self) -> Option<usize> {
        self.active
            .as_deref()
            .and_then(|id| self.candidates.index_of(id))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Make `id` active and ask the surface to scroll it into view.
    ///
    /// `None` clears the active id and is always safe to repeat. An id that
    /// is not a candidate is ignored and `false` is returned. The scroll
    /// request is fire-and-forget; a missing element is not an error.
    pub fn set_active_element_id(&mut self, id: Option<&str>) -> bool {
        let Some(id) = id else {
            self.clear();
            return true;
        };

        if !self.candidates.contains(id) {
            log::debug!("ignoring unknown active id {id:?}");
            return false;
        }

        if !self.is_active(id) {
            log::trace!("active id {:?} -> {id:?}", self.active);
            self.active = Some(id.to_string());
        }

        if !self.adapter.scroll_into_view(id, self.scroll) {
            log::trace!("no rendered element for {id:?}, skipping scroll");
        }
        true
    }

    /// Clear the active id (closing a transient overlay)
    pub fn clear(&mut self) {
        if self.active.take().is_some() {
            log::trace!("active id cleared");
        }
    }

    /// Activate the first candidate
    pub fn first(&mut self) -> bool {
        let first = self.candidates.first().map(str::to_string);
        match first {
            Some(id) => self.set_active_element_id(Some(&id)),
            None => false,
        }
    }

    /// Activate the last candidate
    pub fn last(&mut self) -> bool {
        let last = self.candidates.last().map(str::to_string);
        match last {
            Some(id) => self.set_active_element_id(Some(&id)),
            None => false,
        }
    }

    /// Replace the candidate set, re-establishing the membership invariant
    pub fn set_candidates(&mut self, candidates: CandidateSet) {
        self.candidates = candidates;
        self.correct_active();
    }

    /// Replace the candidate set from raw ids
    pub fn set_ids<I, S>(&mut self, ids: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_candidates(CandidateSet::new(ids)?);
        Ok(())
    }

    fn correct_active(&mut self) {
        let Some(active) = self.active.as_deref() else {
            return;
        };
        if self.candidates.contains(active) {
            return;
        }
        let replacement = self.candidates.first().map(str::to_string);
        log::debug!("active id {active:?} left the candidate set, resetting to {replacement:?}");
        self.active = replacement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::adapter::RecordingAdapter;

    fn set(ids: &[&str]) -> CandidateSet {
        CandidateSet::new(ids.iter().copied()).unwrap()
    }

    #[test]
    fn test_default_active() {
        let registry = ActiveElementRegistry::new(set(&["a", "b"]), Some("b"));
        assert_eq!(registry.active_element_id(), Some("b"));
        assert_eq!(registry.active_index(), Some(1));

        let registry = ActiveElementRegistry::new(set(&["a", "b"]), None);
        assert_eq!(registry.active_element_id(), None);
    }

    #[test]
    fn test_default_outside_set_is_corrected() {
        let registry = ActiveElementRegistry::new(set(&["a", "b"]), Some("zz"));
        assert_eq!(registry.active_element_id(), Some("a"));
    }

    #[test]
    fn test_reset_on_shrink() {
        let mut registry = ActiveElementRegistry::new(set(&["a", "b", "c"]), Some("b"));
        registry.set_ids(["x", "y"]).unwrap();
        assert_eq!(registry.active_element_id(), Some("x"));

        registry.set_ids(Vec::<String>::new()).unwrap();
        assert_eq!(registry.active_element_id(), None);
    }

    #[test]
    fn test_surviving_active_is_kept() {
        let mut registry = ActiveElementRegistry::new(set(&["a", "b", "c"]), Some("c"));
        registry.set_ids(["c", "d"]).unwrap();
        assert_eq!(registry.active_element_id(), Some("c"));
    }

    #[test]
    fn test_cleared_registry_stays_cleared_on_change() {
        let mut registry = ActiveElementRegistry::new(set(&["a"]), None);
        registry.set_ids(["x", "y"]).unwrap();
        assert_eq!(registry.active_element_id(), None);
    }

    #[test]
    fn test_duplicate_ids_leave_registry_untouched() {
        let mut registry = ActiveElementRegistry::new(set(&["a", "b"]), Some("b"));
        assert!(registry.set_ids(["x", "x"]).is_err());
        assert_eq!(registry.candidates().len(), 2);
        assert_eq!(registry.active_element_id(), Some("b"));
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut registry = ActiveElementRegistry::new(set(&["a", "b"]), Some("a"));
        assert!(!registry.set_active_element_id(Some("nope")));
        assert_eq!(registry.active_element_id(), Some("a"));
    }

    #[test]
    fn test_set_requests_scroll() {
        let adapter = RecordingAdapter::with_rendered(["a"]);
        let mut registry =
            ActiveElementRegistry::with_adapter(set(&["a", "b"]), None, adapter.clone());

        assert!(registry.set_active_element_id(Some("a")));
        // "b" is not rendered: state still changes, the scroll is dropped
        assert!(registry.set_active_element_id(Some("b")));

        assert_eq!(registry.active_element_id(), Some("b"));
        assert_eq!(adapter.scrolled_ids(), vec!["a".to_string()]);
        assert_eq!(adapter.requests()[0].1, ScrollIntoView::default());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut registry = ActiveElementRegistry::new(set(&["a"]), Some("a"));
        registry.clear();
        registry.clear();
        assert!(registry.set_active_element_id(None));
        assert_eq!(registry.active_element_id(), None);
    }

    #[test]
    fn test_first_and_last() {
        let mut registry = ActiveElementRegistry::new(set(&["a", "b", "c"]), None);
        assert!(registry.last());
        assert_eq!(registry.active_element_id(), Some("c"));
        assert!(registry.first());
        assert_eq!(registry.active_element_id(), Some("a"));

        let mut empty = ActiveElementRegistry::new(CandidateSet::empty(), None);
        assert!(!empty.first());
    }
}
