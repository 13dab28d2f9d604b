//! The ordered set of actors taking part in a discussion

use crate::actor::profile::{ActorId, ActorProfile};
use crate::core::error::DomainError;
use std::collections::HashSet;

/// Ordered list of actor profiles with unique ids
///
/// Roster order is the order in which actors are presented to the moderator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    actors: Vec<ActorProfile>,
}

impl Roster {
    /// Build a roster, rejecting blank, reserved or duplicate ids
    pub fn new(actors: Vec<ActorProfile>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for actor in &actors {
            actor.validate_id()?;
            if !seen.insert(actor.id.as_str()) {
                return Err(DomainError::DuplicateActor(actor.id.to_string()));
            }
        }
        Ok(Self { actors })
    }

    /// The built-in four-member panel
    pub fn default_panel() -> Self {
        Self {
            actors: vec![
                ActorProfile::new(
                    "questioner",
                    "Questioner",
                    "curious individual who asks insightful questions about the topic required for understanding details",
                ),
                ActorProfile::new(
                    "expert1",
                    "Expert 1",
                    "knowledgeable expert who provides detailed insights, answers questions and validates other experts answers",
                ),
                ActorProfile::new(
                    "expert2",
                    "Expert 2",
                    "knowledgeable expert who provides detailed insights, answers questions and validates other experts answers",
                ),
                ActorProfile::new(
                    "validator",
                    "Validator",
                    "critical thinker who validates questions and answers",
                ),
            ],
        }
    }

    /// All actors, enabled or not, in roster order
    pub fn actors(&self) -> &[ActorProfile] {
        &self.actors
    }

    /// Enabled actors in roster order
    pub fn enabled(&self) -> impl Iterator<Item = &ActorProfile> {
        self.actors.iter().filter(|a| a.enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }

    /// Look up an actor by id regardless of its enabled flag
    pub fn get(&self, id: &ActorId) -> Option<&ActorProfile> {
        self.actors.iter().find(|a| &a.id == id)
    }

    /// Resolve a (possibly loosely written) id against the enabled actors.
    ///
    /// Exact matches win; otherwise the first ASCII case-insensitive match is used.
    pub fn find_enabled(&self, id: &str) -> Option<&ActorProfile> {
        let id = id.trim();
        self.enabled()
            .find(|a| a.id.as_str() == id)
            .or_else(|| self.enabled().find(|a| a.id.as_str().eq_ignore_ascii_case(id)))
    }

    pub fn is_enabled(&self, id: &ActorId) -> bool {
        self.get(id).is_some_and(|a| a.enabled)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(vec![
            ActorProfile::new("expert1", "Expert 1", "expert"),
            ActorProfile::new("questioner", "Questioner", "asks").disabled(),
            ActorProfile::new("validator", "Validator", "checks"),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_panel() {
        let panel = Roster::default_panel();
        let ids: Vec<_> = panel.enabled().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["questioner", "expert1", "expert2", "validator"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = Roster::new(vec![
            ActorProfile::new("expert1", "A", "a"),
            ActorProfile::new("expert1", "B", "b"),
        ]);
        assert_eq!(
            result,
            Err(DomainError::DuplicateActor("expert1".to_string()))
        );
    }

    #[test]
    fn test_enabled_filters_disabled() {
        let roster = roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.enabled_count(), 2);
        assert!(!roster.is_enabled(&ActorId::new("questioner")));
        assert!(roster.is_enabled(&ActorId::new("validator")));
    }

    #[test]
    fn test_find_enabled_exact_then_case_insensitive() {
        let roster = roster();
        assert_eq!(
            roster.find_enabled("expert1").map(|a| a.display_name.as_str()),
            Some("Expert 1")
        );
        assert_eq!(
            roster.find_enabled(" Validator ").map(|a| a.id.as_str()),
            Some("validator")
        );
        assert!(roster.find_enabled("questioner").is_none());
        assert!(roster.find_enabled("expert3").is_none());
    }
}
