//! Discussion lifecycle and terminal outcomes

use serde::{Deserialize, Serialize};

/// Lifecycle state of the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscussionStatus {
    Idle,
    Running,
    Completed,
    Stopped,
    Errored,
}

impl DiscussionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DiscussionStatus::Completed | DiscussionStatus::Stopped | DiscussionStatus::Errored
        )
    }
}

impl std::fmt::Display for DiscussionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DiscussionStatus::Idle => "idle",
            DiscussionStatus::Running => "running",
            DiscussionStatus::Completed => "completed",
            DiscussionStatus::Stopped => "stopped",
            DiscussionStatus::Errored => "errored",
        };
        f.write_str(s)
    }
}

/// Why a discussion completed normally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionReason {
    /// The moderator answered "done"
    ModeratorDone,
    /// `max_rounds` rounds were played
    RoundLimit,
    /// The selected speaker was not part of the enabled roster
    InvalidSelection,
    /// No enabled actor was left to speak
    NoEligibleSpeaker,
}

/// How a discussion ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiscussionOutcome {
    Completed {
        reason: CompletionReason,
        turns: usize,
    },
    Stopped {
        turns: usize,
    },
    Errored {
        error: String,
        turns: usize,
    },
}

impl DiscussionOutcome {
    /// Number of actor turns recorded before the discussion ended
    pub fn turns(&self) -> usize {
        match self {
            DiscussionOutcome::Completed { turns, .. }
            | DiscussionOutcome::Stopped { turns }
            | DiscussionOutcome::Errored { turns, .. } => *turns,
        }
    }

    pub fn status(&self) -> DiscussionStatus {
        match self {
            DiscussionOutcome::Completed { .. } => DiscussionStatus::Completed,
            DiscussionOutcome::Stopped { .. } => DiscussionStatus::Stopped,
            DiscussionOutcome::Errored { .. } => DiscussionStatus::Errored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_status_mapping() {
        let completed = DiscussionOutcome::Completed {
            reason: CompletionReason::RoundLimit,
            turns: 5,
        };
        assert_eq!(completed.status(), DiscussionStatus::Completed);
        assert_eq!(completed.turns(), 5);

        let errored = DiscussionOutcome::Errored {
            error: "boom".to_string(),
            turns: 1,
        };
        assert_eq!(errored.status(), DiscussionStatus::Errored);
        assert!(errored.status().is_terminal());
        assert!(!DiscussionStatus::Running.is_terminal());
    }

    #[test]
    fn test_outcome_serializes_tagged() {
        let json = serde_json::to_value(DiscussionOutcome::Stopped { turns: 2 }).unwrap();
        assert_eq!(json["status"], "stopped");
        assert_eq!(json["turns"], 2);
    }
}
