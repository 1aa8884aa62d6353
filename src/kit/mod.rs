// Navigable widgets for the Orbit component kit

pub mod breadcrumbs;
pub mod checkbox_group;
pub mod menu;
pub mod segmented;

/// Re-export of the kit's widgets for convenience
pub mod prelude {
    pub use crate::kit::breadcrumbs::{BreadcrumbEvent, Breadcrumbs, Crumb};
    pub use crate::kit::checkbox_group::{CheckboxGroup, CheckboxOption};
    pub use crate::kit::menu::{Menu, MenuEvent, MenuItem};
    pub use crate::kit::segmented::{Segment, SegmentedControl};
}
