//! Discussion settings for the orchestrator loop.
//!
//! [`DiscussionSettings`] groups the static parameters that control the round
//! loop in [`DiscussionOrchestrator`](crate::use_cases::run_discussion::DiscussionOrchestrator).

use panel_domain::discussion::policy::{
    DEFAULT_BRIEF_THRESHOLD, DEFAULT_LAST_ROUND_MARGIN, DEFAULT_MAX_ROUNDS,
};
use panel_domain::{DomainError, RoundPolicy};
use serde::{Deserialize, Serialize};

/// What to do when a (non-moderator) actor's inference call fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorFailurePolicy {
    /// End the discussion in the errored state
    #[default]
    Abort,
    /// Report the failure and move on to the next round
    Skip,
}

impl std::str::FromStr for ActorFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(ActorFailurePolicy::Abort),
            "skip" => Ok(ActorFailurePolicy::Skip),
            other => Err(format!(
                "unknown actor failure policy '{}' (expected abort or skip)",
                other
            )),
        }
    }
}

/// Round loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionSettings {
    /// Hard cap on the number of rounds
    pub max_rounds: usize,
    /// Rounds before the cap at which the moderator is asked to wind down
    pub last_round_margin: usize,
    /// Discussions up to this many rounds are kept brief
    pub brief_threshold: usize,
    /// Reaction to an actor inference failure
    pub on_actor_failure: ActorFailurePolicy,
    /// Emit the moderator's directive before each actor turn
    pub announce_directives: bool,
}

impl Default for DiscussionSettings {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            last_round_margin: DEFAULT_LAST_ROUND_MARGIN,
            brief_threshold: DEFAULT_BRIEF_THRESHOLD,
            on_actor_failure: ActorFailurePolicy::Abort,
            announce_directives: false,
        }
    }
}

impl DiscussionSettings {
    // ==================== Builder Methods ====================

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_last_round_margin(mut self, margin: usize) -> Self {
        self.last_round_margin = margin;
        self
    }

    pub fn with_brief_threshold(mut self, threshold: usize) -> Self {
        self.brief_threshold = threshold;
        self
    }

    pub fn with_actor_failure_policy(mut self, policy: ActorFailurePolicy) -> Self {
        self.on_actor_failure = policy;
        self
    }

    pub fn with_announce_directives(mut self, announce: bool) -> Self {
        self.announce_directives = announce;
        self
    }

    /// Build the domain round policy, rejecting a zero round cap
    pub fn round_policy(&self) -> Result<RoundPolicy, DomainError> {
        Ok(RoundPolicy::new(self.max_rounds)?
            .with_last_round_margin(self.last_round_margin)
            .with_brief_threshold(self.brief_threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let settings = DiscussionSettings::default();
        assert_eq!(settings.max_rounds, 10);
        assert_eq!(settings.last_round_margin, 2);
        assert_eq!(settings.brief_threshold, 10);
        assert_eq!(settings.on_actor_failure, ActorFailurePolicy::Abort);
        assert!(!settings.announce_directives);
    }

    #[test]
    fn test_builder_and_policy() {
        let settings = DiscussionSettings::default()
            .with_max_rounds(20)
            .with_last_round_margin(1)
            .with_actor_failure_policy(ActorFailurePolicy::Skip);
        let policy = settings.round_policy().unwrap();
        assert_eq!(policy.max_rounds(), 20);
        assert!(policy.is_last_round(19));
        assert!(!policy.is_brief());
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(DiscussionSettings::default().with_max_rounds(0).round_policy().is_err());
    }

    #[test]
    fn test_failure_policy_from_str() {
        assert_eq!("SKIP".parse::<ActorFailurePolicy>(), Ok(ActorFailurePolicy::Skip));
        assert_eq!(" abort".parse::<ActorFailurePolicy>(), Ok(ActorFailurePolicy::Abort));
        assert!("retry".parse::<ActorFailurePolicy>().is_err());
    }
}
