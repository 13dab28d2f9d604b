//! Domain layer for ai-panel
//!
//! This crate contains the core discussion concepts, entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Panel
//!
//! A fixed [`Roster`] of actors, each with a name and a role, discusses a
//! [`Topic`] round by round. Every reply is appended to a shared
//! [`ConversationHistory`]; actors only ever see its last few messages.
//!
//! ## Moderator
//!
//! Each round the moderator picks the next speaker. Its answer is decoded
//! ([`decode_selection`]), validated against the roster
//! ([`validate_selection`]) and, when it cannot be trusted, replaced by a
//! random pick ([`fallback_selection`]).

pub mod actor;
pub mod conversation;
pub mod core;
pub mod discussion;
pub mod moderator;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use actor::{
    profile::{ActorId, ActorProfile},
    roster::Roster,
};
pub use conversation::{
    CONTEXT_WINDOW,
    history::ConversationHistory,
    message::{Message, Speaker},
};
pub use core::{error::DomainError, model::ModelConfig, topic::Topic};
pub use discussion::{
    outcome::{CompletionReason, DiscussionOutcome, DiscussionStatus},
    policy::RoundPolicy,
    state::{DiscussionState, RoundInfo},
};
pub use moderator::{
    decision::{DONE_SENTINEL, DecisionSource, ModeratorDecision, NextSpeaker},
    parsing::{SelectionDecode, decode_selection},
    selection::{FALLBACK_MARKER, SelectionFailure, fallback_selection, validate_selection},
};
pub use prompt::{GENERIC_FRAMING, PromptTemplate};
