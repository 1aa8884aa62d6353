// Segmented control for the Orbit component kit

use crate::config::{NavigationConfig, Orientation};
use crate::focus::{CandidateSet, NoopAdapter, VisibilityAdapter};
use crate::keyboard::{ArrowKeyNavigation, KeyboardEvent};
use crate::state::{ValueBridge, ValueSlot};
use crate::Error;

/// One segment of a segmented control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub id: String,
    pub label: String,
}

impl Segment {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Single-choice horizontal control
///
/// Left/Right move the highlight and select in the same step; the selected
/// id lives in a [`ValueBridge`], so the control works controlled or not.
#[derive(Debug)]
pub struct SegmentedControl<A = NoopAdapter> {
    segments: Vec<Segment>,
    value: ValueBridge<String>,
    navigation: ArrowKeyNavigation<A>,
}

impl SegmentedControl<NoopAdapter> {
    pub fn new(segments: Vec<Segment>, value: ValueSlot<String>) -> Result<Self, Error> {
        Self::with_adapter(segments, value, NoopAdapter)
    }
}

impl<A: VisibilityAdapter> SegmentedControl<A> {
    pub fn with_adapter(
        segments: Vec<Segment>,
        value: ValueSlot<String>,
        adapter: A,
    ) -> Result<Self, Error> {
        let candidates = CandidateSet::new(segments.iter().map(|segment| segment.id.clone()))?;
        let value = ValueBridge::new(value);
        let selected = value.value();
        let navigation = ArrowKeyNavigation::from_config(
            candidates,
            Some(selected.as_str()),
            &NavigationConfig::new(Orientation::Horizontal),
            adapter,
        );
        // A selection outside the segments falls back to the highlighted one
        if let Some(first) = navigation.active_element_id() {
            if first != selected {
                log::debug!("segment {selected:?} not found, selecting {first:?}");
                value.set(first.to_string());
            }
        }
        Ok(Self {
            segments,
            value,
            navigation,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The selected segment id
    pub fn value(&self) -> String {
        self.value.value()
    }

    pub fn active_element_id(&self) -> Option<&str> {
        self.navigation.active_element_id()
    }

    /// Take the parent's value (controlled mode only); it must name a segment
    pub fn receive(&mut self, value: String) -> Result<(), Error> {
        if !self.navigation.registry().candidates().contains(&value) {
            return Err(Error::UnknownId { id: value });
        }
        self.value.receive(value.clone())?;
        self.navigation.set_active_element_id(Some(&value));
        Ok(())
    }

    pub fn click(&mut self, id: &str) -> bool {
        if !self.navigation.set_active_element_id(Some(id)) {
            return false;
        }
        self.value.set(id.to_string());
        true
    }

    pub fn handle_key_down(&mut self, event: &mut KeyboardEvent) -> bool {
        if !self.navigation.handle_key_down(event) {
            return false;
        }
        if let Some(active) = self.navigation.active_element_id() {
            self.value.set(active.to_string());
        }
        true
    }
}
