//! Domain events - Notifications of state changes within the domain

pub mod roster_events;

pub use roster_events::{EventMetadata, RosterEvent};
