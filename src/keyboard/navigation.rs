//! Registry + router pairing used by navigable widgets

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::NavigationConfig;
use crate::focus::{ActiveElementRegistry, CandidateSet, NoopAdapter, VisibilityAdapter};
use crate::keyboard::event::{code_for_key, KeyboardEvent};
use crate::keyboard::keymap::KeyHandlers;
use crate::keyboard::router::{ArrowKeyParams, ArrowKeyRouter};
use crate::keyboard::transitions::KeyTransitionTable;
use crate::Error;

/// Arrow-key navigation over one candidate set
///
/// Widgets forward keydowns to [`handle_key_down`](Self::handle_key_down)
/// and render highlight state from [`active_element_id`](Self::active_element_id).
#[derive(Debug)]
pub struct ArrowKeyNavigation<A = NoopAdapter> {
    registry: ActiveElementRegistry<A>,
    router: ArrowKeyRouter,
}

impl ArrowKeyNavigation<NoopAdapter> {
    pub fn new(candidates: CandidateSet, default_active: Option<&str>) -> Self {
        Self::with_adapter(candidates, default_active, NoopAdapter)
    }
}

impl<A: VisibilityAdapter> ArrowKeyNavigation<A> {
    pub fn with_adapter(candidates: CandidateSet, default_active: Option<&str>, adapter: A) -> Self {
        Self {
            registry: ActiveElementRegistry::with_adapter(candidates, default_active, adapter),
            router: ArrowKeyRouter::default(),
        }
    }

    /// Build from a configuration's transition table and scroll settings
    pub fn from_config(
        candidates: CandidateSet,
        default_active: Option<&str>,
        config: &NavigationConfig,
        adapter: A,
    ) -> Self {
        Self {
            registry: ActiveElementRegistry::with_adapter(candidates, default_active, adapter)
                .with_scroll(config.scroll),
            router: ArrowKeyRouter::new(config.transition_table()),
        }
    }

    /// Replace the transition table, dropping any callback
    pub fn with_table(mut self, table: KeyTransitionTable) -> Self {
        self.router = ArrowKeyRouter::new(table);
        self
    }

    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ArrowKeyParams<'_>) -> Option<bool> + 'static,
    {
        self.router = self.router.with_callback(callback);
        self
    }

    pub fn active_element_id(&self) -> Option<&str> {
        self.registry.active_element_id()
    }

    pub fn set_active_element_id(&mut self, id: Option<&str>) -> bool {
        self.registry.set_active_element_id(id)
    }

    pub fn clear(&mut self) {
        self.registry.clear();
    }

    pub fn set_candidates(&mut self, candidates: CandidateSet) {
        self.registry.set_candidates(candidates);
    }

    pub fn set_ids<I, S>(&mut self, ids: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.registry.set_ids(ids)
    }

    pub fn registry(&self) -> &ActiveElementRegistry<A> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ActiveElementRegistry<A> {
        &mut self.registry
    }

    pub fn router(&self) -> &ArrowKeyRouter {
        &self.router
    }

    /// Route a keydown; `true` if the key moved the active id
    pub fn handle_key_down(&mut self, event: &mut KeyboardEvent) -> bool {
        self.router.route(&mut self.registry, event)
    }
}

impl<A: VisibilityAdapter + 'static> ArrowKeyNavigation<A> {
    /// Add one handler per routed key to a widget's own key map.
    ///
    /// Each handler routes through the shared navigation, which prevents
    /// the default action only on a committed transition. Dispatch these
    /// keys with [`DispatchOptions::PASSIVE`](crate::keyboard::DispatchOptions::PASSIVE)
    /// so a vetoed arrow keeps its default.
    pub fn bind_into(navigation: &Rc<RefCell<Self>>, mut handlers: KeyHandlers) -> KeyHandlers {
        let routed: Vec<String> = navigation
            .borrow()
            .router
            .table()
            .active_keys()
            .map(code_for_key)
            .collect();
        for code in routed {
            let navigation = Rc::clone(navigation);
            handlers.insert(
                code,
                Box::new(move |event: &mut KeyboardEvent| {
                    navigation.borrow_mut().handle_key_down(event);
                }),
            );
        }
        handlers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Orientation;
    use crate::focus::RecordingAdapter;

    #[test]
    fn test_from_config() {
        let config = NavigationConfig::new(Orientation::Horizontal);
        let adapter = RecordingAdapter::new();
        let mut nav = ArrowKeyNavigation::from_config(
            CandidateSet::new(["a", "b"]).unwrap(),
            None,
            &config,
            adapter.clone(),
        );

        assert!(!nav.handle_key_down(&mut KeyboardEvent::new("ArrowDown")));
        assert!(nav.handle_key_down(&mut KeyboardEvent::new("ArrowRight")));
        assert_eq!(nav.active_element_id(), Some("a"));
        assert_eq!(adapter.scrolled_ids(), vec!["a".to_string()]);
    }

    #[test]
    fn test_bind_into_merges_arrow_handlers() {
        use crate::keyboard::DispatchOptions;

        let nav = Rc::new(RefCell::new(ArrowKeyNavigation::new(
            CandidateSet::new(["a", "b", "c"]).unwrap(),
            Some("a"),
        )
        .with_table(KeyTransitionTable::vertical())));
        let closer = nav.clone();
        let mut handlers = ArrowKeyNavigation::bind_into(
            &nav,
            KeyHandlers::new().on("Escape", move |_| closer.borrow_mut().clear()),
        );
        assert!(handlers.contains("ArrowDown"));
        assert!(handlers.contains("ArrowUp"));
        assert!(!handlers.contains("ArrowLeft"));

        let mut down = KeyboardEvent::new("ArrowDown");
        assert!(handlers.dispatch(&mut down, DispatchOptions::PASSIVE));
        assert!(down.is_default_prevented());
        assert_eq!(nav.borrow().active_element_id(), Some("b"));

        let mut escape = KeyboardEvent::new("Escape");
        assert!(handlers.dispatch(&mut escape, DispatchOptions::default()));
        assert_eq!(nav.borrow().active_element_id(), None);
    }

    #[test]
    fn test_bound_handler_leaves_vetoed_keys_alone() {
        use crate::keyboard::DispatchOptions;

        let nav = Rc::new(RefCell::new(
            ArrowKeyNavigation::new(CandidateSet::new(["a", "b"]).unwrap(), Some("a"))
                .with_callback(|_| Some(false)),
        ));
        let mut handlers = ArrowKeyNavigation::bind_into(&nav, KeyHandlers::new());

        let mut down = KeyboardEvent::new("ArrowDown");
        assert!(handlers.dispatch(&mut down, DispatchOptions::PASSIVE));
        assert!(!down.is_default_prevented());
        assert_eq!(nav.borrow().active_element_id(), Some("a"));
    }

    #[test]
    fn test_with_table() {
        let mut nav = ArrowKeyNavigation::new(CandidateSet::new(["a", "b", "c"]).unwrap(), Some("a"))
            .with_table(KeyTransitionTable::empty().with("PageDown", 2));

        assert!(!nav.handle_key_down(&mut KeyboardEvent::new("ArrowDown")));
        assert!(nav.handle_key_down(&mut KeyboardEvent::new("PageDown")));
        assert_eq!(nav.active_element_id(), Some("c"));
    }
}
