//! Conversation domain
//!
//! The shared, append-only transcript of one discussion and the bounded
//! context window actors are shown.

pub mod history;
pub mod message;

/// Number of most recent messages an actor sees when composing a reply
pub const CONTEXT_WINDOW: usize = 5;
