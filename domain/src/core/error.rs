//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("Actor id cannot be empty")]
    EmptyActorId,

    #[error("Actor id '{0}' is reserved")]
    ReservedActorId(String),

    #[error("Duplicate actor id: {0}")]
    DuplicateActor(String),

    #[error("Invalid round policy: {0}")]
    InvalidRoundPolicy(String),
}

impl DomainError {
    /// Check if this error comes from roster validation
    pub fn is_roster_error(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyActorId
                | DomainError::ReservedActorId(_)
                | DomainError::DuplicateActor(_)
        )
    }
}
