//! Cross-widget signaling
//!
//! Widgets that need to reach something outside their own subtree (a live
//! region, a status bar) publish on an explicit channel obtained from
//! context rather than on a global event name.

pub mod announcer;

pub use announcer::{Announcement, Announcer, Politeness, SubscriptionId};
