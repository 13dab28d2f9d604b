//! Roster persistence
//!
//! Stores the panel as a JSON object keyed by actor id, in roster order.

mod store;

pub use store::{JsonRosterStore, RosterStoreError};
