//! Moderator decision value object

use crate::actor::profile::ActorId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel the moderator answers with to end the discussion
pub const DONE_SENTINEL: &str = "done";

/// Who speaks next
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NextSpeaker {
    Actor(ActorId),
    Done,
}

impl NextSpeaker {
    pub fn as_str(&self) -> &str {
        match self {
            NextSpeaker::Actor(id) => id.as_str(),
            NextSpeaker::Done => DONE_SENTINEL,
        }
    }
}

impl std::fmt::Display for NextSpeaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NextSpeaker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NextSpeaker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.trim().eq_ignore_ascii_case(DONE_SENTINEL) {
            Ok(NextSpeaker::Done)
        } else {
            Ok(NextSpeaker::Actor(ActorId::new(s)))
        }
    }
}

/// Where a decision came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionSource {
    /// A validated answer of the moderator model
    #[default]
    Moderator,
    /// Picked without the moderator after an unusable answer
    Fallback,
    /// The moderator could not be asked at all
    Failure,
}

/// The moderator's choice for one round (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeratorDecision {
    pub next: NextSpeaker,
    /// Instruction for the chosen actor, or the reason for ending
    pub directive: String,
    #[serde(default)]
    pub source: DecisionSource,
}

impl ModeratorDecision {
    pub fn actor(id: impl Into<ActorId>, directive: impl Into<String>) -> Self {
        Self {
            next: NextSpeaker::Actor(id.into()),
            directive: directive.into(),
            source: DecisionSource::Moderator,
        }
    }

    pub fn done(directive: impl Into<String>) -> Self {
        Self {
            next: NextSpeaker::Done,
            directive: directive.into(),
            source: DecisionSource::Moderator,
        }
    }

    /// End the discussion because the moderator itself failed
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::done(reason).with_source(DecisionSource::Failure)
    }

    pub fn with_source(mut self, source: DecisionSource) -> Self {
        self.source = source;
        self
    }

    pub fn is_done(&self) -> bool {
        self.next == NextSpeaker::Done
    }

    pub fn actor_id(&self) -> Option<&ActorId> {
        match &self.next {
            NextSpeaker::Actor(id) => Some(id),
            NextSpeaker::Done => None,
        }
    }
}
