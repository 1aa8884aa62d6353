// Checkbox group for the Orbit component kit

use crate::config::NavigationConfig;
use crate::focus::{CandidateSet, NoopAdapter, VisibilityAdapter};
use crate::keyboard::{keys, ArrowKeyNavigation, KeyboardEvent};
use crate::state::{SetValue, ValueBridge, ValueSlot};
use crate::Error;

/// One checkbox in a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxOption {
    pub id: String,
    pub label: String,
    pub disabled: bool,
}

impl CheckboxOption {
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

/// Multi-choice group whose value is the list of checked ids
///
/// Toggles are functional updates against the latest value, so several
/// toggles inside one handler all land.
#[derive(Debug)]
pub struct CheckboxGroup<A = NoopAdapter> {
    options: Vec<CheckboxOption>,
    value: ValueBridge<Vec<String>>,
    navigation: ArrowKeyNavigation<A>,
}

impl CheckboxGroup<NoopAdapter> {
    pub fn new(options: Vec<CheckboxOption>, value: ValueSlot<Vec<String>>) -> Result<Self, Error> {
        Self::with_adapter(options, value, &NavigationConfig::default(), NoopAdapter)
    }
}

impl<A: VisibilityAdapter> CheckboxGroup<A> {
    pub fn with_adapter(
        options: Vec<CheckboxOption>,
        value: ValueSlot<Vec<String>>,
        config: &NavigationConfig,
        adapter: A,
    ) -> Result<Self, Error> {
        let candidates = CandidateSet::new(
            options
                .iter()
                .filter(|option| !option.disabled)
                .map(|option| option.id.clone()),
        )?;
        Ok(Self {
            options,
            value: ValueBridge::new(value),
            navigation: ArrowKeyNavigation::from_config(candidates, None, config, adapter),
        })
    }

    pub fn options(&self) -> &[CheckboxOption] {
        &self.options
    }

    /// Checked ids; options follow option order, other ids keep their place
    pub fn value(&self) -> Vec<String> {
        self.value.value()
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.value.with(|checked| checked.iter().any(|c| c == id))
    }

    pub fn active_element_id(&self) -> Option<&str> {
        self.navigation.active_element_id()
    }

    /// Take the parent's value (controlled mode only)
    pub fn receive(&mut self, value: Vec<String>) -> Result<(), Error> {
        self.value.receive(value)
    }

    /// Flip one checkbox; disabled and unknown ids are ignored
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.navigation.registry().candidates().contains(id) {
            return false;
        }
        self.navigation.set_active_element_id(Some(id));

        let order: Vec<String> = self.options.iter().map(|o| o.id.clone()).collect();
        let id = id.to_string();
        self.value.set_value(SetValue::update(move |checked: &Vec<String>| {
            if checked.contains(&id) {
                return checked.iter().filter(|c| **c != id).cloned().collect();
            }
            // Insert before the first checked option that follows `id`; ids
            // that are not options keep their place
            let rank = |candidate: &String| order.iter().position(|o| o == candidate);
            let own_rank = rank(&id);
            let at = checked
                .iter()
                .position(|c| matches!((rank(c), own_rank), (Some(r), Some(own)) if r > own))
                .unwrap_or(checked.len());
            let mut next = checked.clone();
            next.insert(at, id);
            next
        }));
        true
    }

    /// Arrows move between checkboxes; Space toggles the active one
    pub fn handle_key_down(&mut self, event: &mut KeyboardEvent) -> bool {
        if self.navigation.handle_key_down(event) {
            return true;
        }
        if event.code != keys::SPACE {
            return false;
        }
        let Some(active) = self.navigation.active_element_id().map(str::to_string) else {
            return false;
        };
        event.prevent_default();
        self.toggle(&active)
    }
}
