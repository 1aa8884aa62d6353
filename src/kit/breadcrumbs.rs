// Breadcrumb trail with an overflow dropdown

use crate::config::{NavigationConfig, Orientation};
use crate::focus::{
    use_ids, CandidateSet, IdGenerator, Identified, MaybeIdentified, NoopAdapter,
    VisibilityAdapter,
};
use crate::keyboard::{keys, ArrowKeyNavigation, DispatchOptions, KeyMap, KeyboardEvent};
use crate::Error;

/// One step of a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub id: Option<String>,
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            href: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

impl MaybeIdentified for Crumb {
    fn existing_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// What a breadcrumb interaction did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreadcrumbEvent {
    OverflowOpened,
    OverflowClosed,
    /// A crumb was activated; carries its navigation id
    Navigate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverflowKey {
    Activate,
    Close,
    /// Close and let focus move on
    Leave,
}

/// Breadcrumb trail that collapses its middle into a dropdown
///
/// With more crumbs than `max_visible`, the first crumb and the trailing
/// `max_visible - 1` stay inline; the rest move into an overflow dropdown
/// navigated with Up/Down.
#[derive(Debug)]
pub struct Breadcrumbs<A = NoopAdapter> {
    crumbs: Vec<Identified<Crumb>>,
    hidden: std::ops::Range<usize>,
    overflow_open: bool,
    navigation: ArrowKeyNavigation<A>,
    bindings: KeyMap<OverflowKey>,
    dispatch: DispatchOptions,
}

impl Breadcrumbs<NoopAdapter> {
    pub fn new(ids: &IdGenerator, crumbs: Vec<Crumb>, max_visible: usize) -> Result<Self, Error> {
        Self::with_adapter(ids, crumbs, max_visible, NoopAdapter)
    }
}

impl<A: VisibilityAdapter> Breadcrumbs<A> {
    pub fn with_adapter(
        ids: &IdGenerator,
        crumbs: Vec<Crumb>,
        max_visible: usize,
        adapter: A,
    ) -> Result<Self, Error> {
        let crumbs = use_ids(&ids.next_id("breadcrumbs"), &crumbs);
        let hidden = Self::hidden_range(crumbs.len(), max_visible);
        let candidates = CandidateSet::new(crumbs[hidden.clone()].iter().map(|c| c.id.clone()))?;
        // Inline crumbs take part in uniqueness too
        CandidateSet::new(crumbs.iter().map(|c| c.id.clone()))?;

        let config = NavigationConfig::new(Orientation::Vertical);
        Ok(Self {
            crumbs,
            hidden,
            overflow_open: false,
            navigation: ArrowKeyNavigation::from_config(candidates, None, &config, adapter),
            bindings: KeyMap::new()
                .bind(keys::ENTER, OverflowKey::Activate)
                .bind(keys::SPACE, OverflowKey::Activate)
                .bind(keys::ESCAPE, OverflowKey::Close)
                .bind(keys::TAB, OverflowKey::Leave),
            dispatch: config.dispatch,
        })
    }

    fn hidden_range(len: usize, max_visible: usize) -> std::ops::Range<usize> {
        let max_visible = max_visible.max(2);
        if len <= max_visible {
            return 0..0;
        }
        1..len - (max_visible - 1)
    }

    pub fn crumbs(&self) -> &[Identified<Crumb>] {
        &self.crumbs
    }

    /// Crumbs rendered inline, in order
    pub fn visible(&self) -> Vec<&Identified<Crumb>> {
        self.crumbs
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.hidden.contains(index))
            .map(|(_, crumb)| crumb)
            .collect()
    }

    /// Crumbs collapsed into the overflow dropdown
    pub fn hidden(&self) -> &[Identified<Crumb>] {
        &self.crumbs[self.hidden.clone()]
    }

    pub fn has_overflow(&self) -> bool {
        !self.hidden.is_empty()
    }

    pub fn is_overflow_open(&self) -> bool {
        self.overflow_open
    }

    pub fn active_element_id(&self) -> Option<&str> {
        self.navigation.active_element_id()
    }

    pub fn open_overflow(&mut self) -> Option<BreadcrumbEvent> {
        if self.overflow_open || !self.has_overflow() {
            return None;
        }
        self.overflow_open = true;
        self.navigation.registry_mut().first();
        Some(BreadcrumbEvent::OverflowOpened)
    }

    pub fn close_overflow(&mut self) -> Option<BreadcrumbEvent> {
        self.navigation.clear();
        if !self.overflow_open {
            return None;
        }
        self.overflow_open = false;
        Some(BreadcrumbEvent::OverflowClosed)
    }

    /// Activate any crumb by id, inline or hidden
    pub fn click(&mut self, id: &str) -> Option<BreadcrumbEvent> {
        if !self.crumbs.iter().any(|crumb| crumb.id == id) {
            return None;
        }
        self.close_overflow();
        Some(BreadcrumbEvent::Navigate(id.to_string()))
    }

    /// Keys for the open overflow dropdown
    pub fn handle_key_down(&mut self, event: &mut KeyboardEvent) -> Option<BreadcrumbEvent> {
        if !self.overflow_open {
            return None;
        }
        if self.navigation.handle_key_down(event) {
            return None;
        }
        let options = match self.bindings.resolve(event)? {
            OverflowKey::Leave => DispatchOptions::PASSIVE,
            _ => self.dispatch,
        };
        let action = *self.bindings.route(event, options)?;
        match action {
            OverflowKey::Activate => {
                let id = self.active_element_id()?.to_string();
                self.click(&id)
            }
            OverflowKey::Close | OverflowKey::Leave => self.close_overflow(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(n: usize) -> Vec<Crumb> {
        (0..n).map(|i| Crumb::new(format!("Level {i}"))).collect()
    }

    #[test]
    fn test_ids_are_synthesized() {
        let ids = IdGenerator::with_tag("t");
        let crumbs = vec![Crumb::new("Home").with_id("home"), Crumb::new("Docs")];
        let breadcrumbs = Breadcrumbs::new(&ids, crumbs, 4).unwrap();
        let ids: Vec<&str> = breadcrumbs.crumbs().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "breadcrumbs-t-0-item-1"]);
        assert!(!breadcrumbs.has_overflow());
    }

    #[test]
    fn test_overflow_split() {
        let breadcrumbs = Breadcrumbs::new(&IdGenerator::with_tag("t"), trail(6), 3).unwrap();
        let visible: Vec<&str> = breadcrumbs
            .visible()
            .iter()
            .map(|c| c.item.label.as_str())
            .collect();
        assert_eq!(visible, vec!["Level 0", "Level 4", "Level 5"]);
        assert_eq!(breadcrumbs.hidden().len(), 3);
    }

    #[test]
    fn test_overflow_navigation() {
        let mut breadcrumbs = Breadcrumbs::new(&IdGenerator::with_tag("t"), trail(5), 2).unwrap();
        assert_eq!(
            breadcrumbs.handle_key_down(&mut KeyboardEvent::new("ArrowDown")),
            None
        );
        assert_eq!(breadcrumbs.active_element_id(), None);

        assert_eq!(
            breadcrumbs.open_overflow(),
            Some(BreadcrumbEvent::OverflowOpened)
        );
        assert_eq!(breadcrumbs.active_element_id(), Some("breadcrumbs-t-0-item-1"));

        breadcrumbs.handle_key_down(&mut KeyboardEvent::new("ArrowUp"));
        assert_eq!(breadcrumbs.active_element_id(), Some("breadcrumbs-t-0-item-3"));

        assert_eq!(
            breadcrumbs.handle_key_down(&mut KeyboardEvent::new("Enter")),
            Some(BreadcrumbEvent::Navigate("breadcrumbs-t-0-item-3".to_string()))
        );
        assert!(!breadcrumbs.is_overflow_open());
        assert_eq!(breadcrumbs.active_element_id(), None);
    }

    #[test]
    fn test_escape_closes_overflow() {
        let mut breadcrumbs = Breadcrumbs::new(&IdGenerator::with_tag("t"), trail(5), 2).unwrap();
        breadcrumbs.open_overflow();
        assert_eq!(
            breadcrumbs.handle_key_down(&mut KeyboardEvent::new("Escape")),
            Some(BreadcrumbEvent::OverflowClosed)
        );
        assert_eq!(breadcrumbs.close_overflow(), None);
    }

    #[test]
    fn test_tab_closes_without_trapping_focus() {
        let mut breadcrumbs = Breadcrumbs::new(&IdGenerator::with_tag("t"), trail(5), 2).unwrap();
        breadcrumbs.open_overflow();

        let mut tab = KeyboardEvent::new("Tab");
        assert_eq!(
            breadcrumbs.handle_key_down(&mut tab),
            Some(BreadcrumbEvent::OverflowClosed)
        );
        assert!(!tab.is_default_prevented());

        breadcrumbs.open_overflow();
        let mut escape = KeyboardEvent::new("Escape");
        breadcrumbs.handle_key_down(&mut escape);
        assert!(escape.is_default_prevented());
    }

    #[test]
    fn test_duplicate_explicit_ids_fail() {
        let crumbs = vec![Crumb::new("A").with_id("x"), Crumb::new("B").with_id("x")];
        assert!(matches!(
            Breadcrumbs::new(&IdGenerator::with_tag("t"), crumbs, 5),
            Err(Error::DuplicateId { .. })
        ));
    }
}
