//! Rendering-surface adapters for focus side effects
//!
//! The registry never touches a rendering surface directly. Scroll requests
//! go through a [`VisibilityAdapter`], so the state machine runs the same
//! against the DOM, a test double, or nothing at all.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Scroll animation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
    Auto,
}

/// Where the element lands in its scroll container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAlignment {
    #[default]
    Nearest,
    Start,
    Center,
    End,
}

/// A scroll-into-view request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollIntoView {
    pub behavior: ScrollBehavior,
    pub block: ScrollAlignment,
}

/// Presentation-layer hooks consumed by the navigation core
pub trait VisibilityAdapter {
    /// Ask the surface to bring the element with `id` into view.
    ///
    /// Returns `false` when no such element is rendered. Callers treat the
    /// request as fire-and-forget.
    fn scroll_into_view(&self, id: &str, options: ScrollIntoView) -> bool;

    /// Whether an element with `id` is currently rendered
    fn element_exists(&self, id: &str) -> bool;
}

/// Adapter for surfaces with nothing to scroll
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAdapter;

impl VisibilityAdapter for NoopAdapter {
    fn scroll_into_view(&self, _id: &str, _options: ScrollIntoView) -> bool {
        false
    }

    fn element_exists(&self, _id: &str) -> bool {
        false
    }
}

/// Test double that records every scroll request it could satisfy
///
/// Clones share the same log, so a test can keep one handle while the
/// registry owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingAdapter {
    /// Ids that count as rendered; `None` means every id is rendered
    rendered: Option<Rc<HashSet<String>>>,
    requests: Rc<RefCell<Vec<(String, ScrollIntoView)>>>,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the given ids are rendered; requests for others are dropped
    pub fn with_rendered<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rendered: Some(Rc::new(ids.into_iter().map(Into::into).collect())),
            requests: Rc::default(),
        }
    }

    /// Requests recorded so far, oldest first
    pub fn requests(&self) -> Vec<(String, ScrollIntoView)> {
        self.requests.borrow().clone()
    }

    /// Ids of the recorded requests
    pub fn scrolled_ids(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }
}

impl VisibilityAdapter for RecordingAdapter {
    fn scroll_into_view(&self, id: &str, options: ScrollIntoView) -> bool {
        if !self.element_exists(id) {
            return false;
        }
        self.requests.borrow_mut().push((id.to_string(), options));
        true
    }

    fn element_exists(&self, id: &str) -> bool {
        self.rendered
            .as_ref()
            .map_or(true, |rendered| rendered.contains(id))
    }
}

#[cfg(feature = "web")]
pub use dom::DomAdapter;

#[cfg(feature = "web")]
mod dom {
    use super::{ScrollAlignment, ScrollBehavior, ScrollIntoView, VisibilityAdapter};

    /// Browser DOM adapter, resolving ids with `getElementById`
    ///
    /// Outside a browser (no window or document) every lookup misses.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DomAdapter;

    impl DomAdapter {
        fn element(id: &str) -> Option<web_sys::Element> {
            web_sys::window()?.document()?.get_element_by_id(id)
        }
    }

    impl VisibilityAdapter for DomAdapter {
        fn scroll_into_view(&self, id: &str, options: ScrollIntoView) -> bool {
            let Some(element) = Self::element(id) else {
                return false;
            };

            let dom_options = web_sys::ScrollIntoViewOptions::new();
            dom_options.set_behavior(match options.behavior {
                ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
                ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
                ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
            });
            dom_options.set_block(match options.block {
                ScrollAlignment::Nearest => web_sys::ScrollLogicalPosition::Nearest,
                ScrollAlignment::Start => web_sys::ScrollLogicalPosition::Start,
                ScrollAlignment::Center => web_sys::ScrollLogicalPosition::Center,
                ScrollAlignment::End => web_sys::ScrollLogicalPosition::End,
            });
            element.scroll_into_view_with_scroll_into_view_options(&dom_options);
            true
        }

        fn element_exists(&self, id: &str) -> bool {
            Self::element(id).is_some()
        }
    }
}
