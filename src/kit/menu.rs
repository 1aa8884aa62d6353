// Dropdown menu for the Orbit component kit

use crate::config::{NavigationConfig, Orientation};
use crate::context::ContextProvider;
use crate::events::{Announcer, Politeness};
use crate::focus::{CandidateSet, NoopAdapter, VisibilityAdapter};
use crate::keyboard::{keys, ArrowKeyNavigation, DispatchOptions, KeyMap, KeyboardEvent};
use crate::Error;

/// One entry of a menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    /// Disabled items are rendered but never become active
    pub disabled: bool,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// What a menu interaction did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    Opened,
    Closed,
    Selected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuKey {
    First,
    Last,
    Select,
    Close,
}

/// Transient overlay menu with keyboard navigation
///
/// While open, arrows move the highlight (with wraparound), Home/End jump,
/// Enter/Space select the highlighted item, and Escape or blur close the
/// menu. Closing clears the active id and is safe to repeat.
#[derive(Debug)]
pub struct Menu<A = NoopAdapter> {
    items: Vec<MenuItem>,
    open: bool,
    navigation: ArrowKeyNavigation<A>,
    bindings: KeyMap<MenuKey>,
    dispatch: DispatchOptions,
    announcer: Option<Announcer>,
}

impl Menu<NoopAdapter> {
    pub fn new(items: Vec<MenuItem>) -> Result<Self, Error> {
        Self::with_adapter(items, &NavigationConfig::new(Orientation::Vertical), NoopAdapter)
    }
}

impl<A: VisibilityAdapter> Menu<A> {
    pub fn with_adapter(
        items: Vec<MenuItem>,
        config: &NavigationConfig,
        adapter: A,
    ) -> Result<Self, Error> {
        let candidates = Self::candidates(&items)?;
        Ok(Self {
            items,
            open: false,
            navigation: ArrowKeyNavigation::from_config(candidates, None, config, adapter),
            bindings: KeyMap::new()
                .bind(keys::HOME, MenuKey::First)
                .bind(keys::END, MenuKey::Last)
                .bind(keys::ENTER, MenuKey::Select)
                .bind(keys::SPACE, MenuKey::Select)
                .bind(keys::ESCAPE, MenuKey::Close),
            dispatch: config.dispatch,
            announcer: None,
        })
    }

    /// Build a menu inside a widget tree.
    ///
    /// Requires an [`Announcer`] from an ancestor; a provided
    /// [`NavigationConfig`] replaces the vertical default.
    pub fn from_context(
        items: Vec<MenuItem>,
        context: &ContextProvider,
        adapter: A,
    ) -> Result<Self, Error> {
        let announcer = context.require::<Announcer>()?;
        let config = context
            .consume::<NavigationConfig>()
            .unwrap_or_else(|| NavigationConfig::new(Orientation::Vertical));
        let mut menu = Self::with_adapter(items, &config, adapter)?;
        menu.announcer = Some(announcer);
        Ok(menu)
    }

    fn candidates(items: &[MenuItem]) -> Result<CandidateSet, Error> {
        CandidateSet::new(
            items
                .iter()
                .filter(|item| !item.disabled)
                .map(|item| item.id.clone()),
        )
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Replace the items; a highlight on a removed item moves to the first one
    pub fn set_items(&mut self, items: Vec<MenuItem>) -> Result<(), Error> {
        self.navigation.set_candidates(Self::candidates(&items)?);
        self.items = items;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active_element_id(&self) -> Option<&str> {
        self.navigation.active_element_id()
    }

    pub fn active_item(&self) -> Option<&MenuItem> {
        let active = self.active_element_id()?;
        self.items.iter().find(|item| item.id == active)
    }

    /// Open the menu with nothing highlighted
    pub fn open(&mut self) -> Option<MenuEvent> {
        if self.open {
            return None;
        }
        self.open = true;
        Some(MenuEvent::Opened)
    }

    /// Close the menu, clearing the highlight
    pub fn close(&mut self) -> Option<MenuEvent> {
        self.navigation.clear();
        if !self.open {
            return None;
        }
        self.open = false;
        Some(MenuEvent::Closed)
    }

    /// Focus left the menu or the user clicked outside it
    pub fn blur(&mut self) -> Option<MenuEvent> {
        self.close()
    }

    /// Pointer entered an item
    pub fn hover(&mut self, id: &str) {
        if self.open {
            self.navigation.set_active_element_id(Some(id));
        }
    }

    /// Pointer activated an item; ignored while the menu is closed
    pub fn click(&mut self, id: &str) -> Option<MenuEvent> {
        if !self.open {
            return None;
        }
        if !self.navigation.set_active_element_id(Some(id)) {
            return None;
        }
        self.select_active()
    }

    pub fn handle_key_down(&mut self, event: &mut KeyboardEvent) -> Option<MenuEvent> {
        if !self.open {
            return self.open_from_key(event);
        }

        if self.navigation.handle_key_down(event) {
            return None;
        }

        let action = *self.bindings.route(event, self.dispatch)?;
        match action {
            MenuKey::First => {
                self.navigation.registry_mut().first();
                None
            }
            MenuKey::Last => {
                self.navigation.registry_mut().last();
                None
            }
            MenuKey::Select => self.select_active(),
            MenuKey::Close => self.close(),
        }
    }

    fn open_from_key(&mut self, event: &mut KeyboardEvent) -> Option<MenuEvent> {
        let from_end = match event.key.as_str() {
            keys::ARROW_UP => true,
            keys::ARROW_DOWN | keys::ENTER | " " => false,
            _ => return None,
        };
        event.prevent_default();
        let opened = self.open();
        let registry = self.navigation.registry_mut();
        if from_end {
            registry.last();
        } else {
            registry.first();
        }
        opened
    }

    fn select_active(&mut self) -> Option<MenuEvent> {
        let item = self.active_item()?.clone();
        self.close();
        if let Some(announcer) = &self.announcer {
            if let Err(e) = announcer.announce(format!("{} selected", item.label), Politeness::Polite) {
                log::warn!("menu announcement dropped: {e}");
            }
        }
        Some(MenuEvent::Selected(item.id))
    }
}
