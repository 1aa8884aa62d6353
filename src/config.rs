//! Navigation configuration
//!
//! Widgets accept a [`NavigationConfig`], usually built in code but also
//! loadable from JSON so design-system packages can ship presets.
//!
//! ```json
//! {
//!   "orientation": "horizontal",
//!   "transitions": { "PageDown": 5 },
//!   "scroll": { "behavior": "instant", "block": "center" },
//!   "dispatch": { "stop_propagation": true }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::focus::ScrollIntoView;
use crate::keyboard::{DispatchOptions, KeyTransitionTable};
use crate::Error;

/// Which arrow keys a widget responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
    #[default]
    Both,
}

impl Orientation {
    /// The transition table for this orientation
    pub fn table(self) -> KeyTransitionTable {
        match self {
            Orientation::Horizontal => KeyTransitionTable::horizontal(),
            Orientation::Vertical => KeyTransitionTable::vertical(),
            Orientation::Both => KeyTransitionTable::default(),
        }
    }
}

/// Scroll settings for active-element changes
pub type ScrollConfig = ScrollIntoView;

/// Propagation settings for non-arrow key bindings
pub type DispatchConfig = DispatchOptions;

/// Settings shared by navigable widgets
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub orientation: Orientation,
    /// Entries layered over the orientation's table
    pub transitions: Option<KeyTransitionTable>,
    pub scroll: ScrollConfig,
    pub dispatch: DispatchConfig,
}

impl NavigationConfig {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// The effective transition table
    pub fn transition_table(&self) -> KeyTransitionTable {
        let mut table = self.orientation.table();
        if let Some(overrides) = &self.transitions {
            table.merge(overrides);
        }
        table
    }
}
