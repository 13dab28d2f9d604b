//! Application-level configuration.
//!
//! - [`DiscussionSettings`]: round limits and failure policy of the orchestrator

pub mod discussion_settings;

pub use discussion_settings::{ActorFailurePolicy, DiscussionSettings};
