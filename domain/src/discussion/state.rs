//! Transient per-run round state

use crate::discussion::policy::RoundPolicy;

/// Framing of a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundInfo {
    /// 1-based round number
    pub index: usize,
    pub is_last_round: bool,
    pub is_brief: bool,
}

/// Round counter of a running discussion. Never persisted.
#[derive(Debug, Clone)]
pub struct DiscussionState {
    round_index: usize,
    policy: RoundPolicy,
}

impl DiscussionState {
    pub fn new(policy: RoundPolicy) -> Self {
        Self {
            round_index: 0,
            policy,
        }
    }

    /// Whether another round may be played
    pub fn has_rounds_left(&self) -> bool {
        self.round_index < self.policy.max_rounds()
    }

    /// Advance to the next round and describe it
    pub fn begin_round(&mut self) -> RoundInfo {
        self.round_index += 1;
        RoundInfo {
            index: self.round_index,
            is_last_round: self.policy.is_last_round(self.round_index),
            is_brief: self.policy.is_brief(),
        }
    }

    pub fn round_index(&self) -> usize {
        self.round_index
    }

    pub fn policy(&self) -> &RoundPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_stop_at_max() {
        let mut state = DiscussionState::new(RoundPolicy::new(3).unwrap());
        let mut played = 0;
        while state.has_rounds_left() {
            state.begin_round();
            played += 1;
        }
        assert_eq!(played, 3);
        assert_eq!(state.round_index(), 3);
    }

    #[test]
    fn test_round_info_flags() {
        let mut state = DiscussionState::new(RoundPolicy::new(5).unwrap());
        let rounds: Vec<_> = (0..5).map(|_| state.begin_round()).collect();
        assert_eq!(rounds[0].index, 1);
        assert!(rounds.iter().all(|r| r.is_brief));
        assert!(rounds[2].is_last_round);
        assert_eq!(rounds.iter().filter(|r| r.is_last_round).count(), 1);
    }
}
