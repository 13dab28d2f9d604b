//! Prompt domain
//!
//! Templates for the actor turn prompt and the moderator selection prompt.

mod template;

pub use template::{GENERIC_FRAMING, PromptTemplate};
