//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod actor;
pub mod moderator;
pub mod run_discussion;
