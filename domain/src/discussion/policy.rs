//! Round policy value object

use crate::core::error::DomainError;

/// Default number of rounds in a discussion
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Default lookahead before the hard cap at which the wind-down round happens
pub const DEFAULT_LAST_ROUND_MARGIN: usize = 2;

/// Discussions with at most this many rounds use the brief style
pub const DEFAULT_BRIEF_THRESHOLD: usize = 10;

/// How many rounds a discussion may take and how its rounds are framed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundPolicy {
    max_rounds: usize,
    last_round_margin: usize,
    brief_threshold: usize,
}

impl Default for RoundPolicy {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            last_round_margin: DEFAULT_LAST_ROUND_MARGIN,
            brief_threshold: DEFAULT_BRIEF_THRESHOLD,
        }
    }
}

impl RoundPolicy {
    /// Create a policy with the default margin and brief threshold
    pub fn new(max_rounds: usize) -> Result<Self, DomainError> {
        if max_rounds == 0 {
            return Err(DomainError::InvalidRoundPolicy(
                "max_rounds must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            max_rounds,
            ..Default::default()
        })
    }

    pub fn with_last_round_margin(mut self, margin: usize) -> Self {
        self.last_round_margin = margin;
        self
    }

    pub fn with_brief_threshold(mut self, threshold: usize) -> Self {
        self.brief_threshold = threshold;
        self
    }

    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    pub fn last_round_margin(&self) -> usize {
        self.last_round_margin
    }

    pub fn brief_threshold(&self) -> usize {
        self.brief_threshold
    }

    /// Whether `round` (1-based) is the wind-down round
    ///
    /// This is `max_rounds - last_round_margin`; when the margin reaches or
    /// exceeds `max_rounds` no round is ever the last one.
    pub fn is_last_round(&self, round: usize) -> bool {
        self.max_rounds
            .checked_sub(self.last_round_margin)
            .is_some_and(|last| last > 0 && round == last)
    }

    /// Whether replies should be kept short
    pub fn is_brief(&self) -> bool {
        self.max_rounds <= self.brief_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(RoundPolicy::new(0).is_err());
        assert!(RoundPolicy::new(1).is_ok());
    }

    #[test]
    fn test_last_round_uses_two_round_margin() {
        let policy = RoundPolicy::new(10).unwrap();
        let last: Vec<_> = (1..=10).filter(|r| policy.is_last_round(*r)).collect();
        assert_eq!(last, vec![8]);
    }

    #[test]
    fn test_last_round_custom_margin() {
        let policy = RoundPolicy::new(10).unwrap().with_last_round_margin(1);
        assert!(policy.is_last_round(9));
        assert!(!policy.is_last_round(8));
    }

    #[test]
    fn test_margin_too_large_never_last() {
        let policy = RoundPolicy::new(2).unwrap();
        assert!((0..=2).all(|r| !policy.is_last_round(r)));
    }

    #[test]
    fn test_is_brief_threshold() {
        assert!(RoundPolicy::new(10).unwrap().is_brief());
        assert!(!RoundPolicy::new(11).unwrap().is_brief());
        assert!(
            RoundPolicy::new(15)
                .unwrap()
                .with_brief_threshold(20)
                .is_brief()
        );
    }
}
