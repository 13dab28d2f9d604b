//! Conversation message entity

use crate::actor::profile::ActorId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    System,
    Moderator,
    Actor(ActorId),
}

impl Speaker {
    /// Key used when rendering the message into a context window
    pub fn as_str(&self) -> &str {
        match self {
            Speaker::System => "system",
            Speaker::Moderator => "moderator",
            Speaker::Actor(id) => id.as_str(),
        }
    }

    pub fn actor_id(&self) -> Option<&ActorId> {
        match self {
            Speaker::Actor(id) => Some(id),
            _ => None,
        }
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn in the conversation. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    speaker: Speaker,
    text: String,
    sequence: u64,
    timestamp: DateTime<Utc>,
}

impl Message {
    pub(crate) fn new(speaker: Speaker, text: String, sequence: u64) -> Self {
        Self {
            speaker,
            text,
            sequence,
            timestamp: Utc::now(),
        }
    }

    pub fn speaker(&self) -> &Speaker {
        &self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Render as a `"{speaker}: {text}"` context line
    pub fn context_line(&self) -> String {
        format!("{}: {}", self.speaker, self.text)
    }
}
