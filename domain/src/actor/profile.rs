//! Actor identity value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Stable key of an actor (e.g. `"expert1"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ActorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for ActorId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ActorId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A conversational participant (Value Object)
///
/// Immutable for the duration of a discussion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorProfile {
    pub id: ActorId,
    pub display_name: String,
    pub role_description: String,
    pub enabled: bool,
}

impl ActorProfile {
    /// Create an enabled actor profile
    pub fn new(
        id: impl Into<ActorId>,
        display_name: impl Into<String>,
        role_description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            role_description: role_description.into(),
            enabled: true,
        }
    }

    /// Identity the moderator speaks with
    pub fn moderator() -> Self {
        Self::new(
            "moderator",
            "Moderator",
            "discussion leader who manages the conversation flow",
        )
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Check the id is usable as a roster key
    pub(crate) fn validate_id(&self) -> Result<(), DomainError> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::EmptyActorId);
        }
        if self
            .id
            .as_str()
            .eq_ignore_ascii_case(crate::moderator::decision::DONE_SENTINEL)
        {
            return Err(DomainError::ReservedActorId(self.id.to_string()));
        }
        Ok(())
    }
}
