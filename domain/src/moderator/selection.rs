//! Selection validation and random fallback

use crate::actor::profile::{ActorId, ActorProfile};
use crate::actor::roster::Roster;
use crate::moderator::decision::{DONE_SENTINEL, DecisionSource, ModeratorDecision};
use crate::moderator::parsing::SelectionDecode;
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Prefix of every directive produced by the fallback path
pub const FALLBACK_MARKER: &str = "Fallback selection";

/// Reasons a decoded moderator answer cannot be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionFailure {
    #[error("malformed moderator output: {0}")]
    Malformed(String),

    #[error("unknown or disabled actor: {0}")]
    UnknownActor(String),

    #[error("actor {0} spoke in the previous round")]
    RepeatedSpeaker(ActorId),
}

/// Check a decoded answer against the enabled roster.
///
/// `"done"` is always accepted. With two or more enabled actors, picking the
/// previous speaker again is rejected.
pub fn validate_selection(
    decode: SelectionDecode,
    roster: &Roster,
    previous: Option<&ActorId>,
) -> Result<ModeratorDecision, SelectionFailure> {
    let (actor, reason) = match decode {
        SelectionDecode::Decoded { actor, reason } => (actor, reason),
        SelectionDecode::Malformed(why) => return Err(SelectionFailure::Malformed(why)),
    };

    if actor.eq_ignore_ascii_case(DONE_SENTINEL) {
        return Ok(ModeratorDecision::done(reason));
    }

    let profile = roster
        .find_enabled(&actor)
        .ok_or_else(|| SelectionFailure::UnknownActor(actor.clone()))?;

    if previous == Some(&profile.id) && roster.enabled_count() > 1 {
        return Err(SelectionFailure::RepeatedSpeaker(profile.id.clone()));
    }

    Ok(ModeratorDecision::actor(profile.id.clone(), reason))
}

/// Pick a speaker without the moderator's help.
///
/// Chooses uniformly among the enabled actors other than `previous`. A roster
/// with a single enabled actor re-selects that actor; a roster with none
/// yields `done`. Never fails.
pub fn fallback_selection<R: Rng + ?Sized>(
    roster: &Roster,
    previous: Option<&ActorId>,
    topic: &str,
    rng: &mut R,
) -> ModeratorDecision {
    let candidates: Vec<&ActorProfile> = roster
        .enabled()
        .filter(|a| Some(&a.id) != previous)
        .collect();

    let chosen = match candidates.choose(rng) {
        Some(actor) => Some(*actor),
        None => roster.enabled().next(),
    };

    let decision = match chosen {
        Some(actor) => ModeratorDecision::actor(
            actor.id.clone(),
            format!(
                "{}: {}, please continue the discussion about '{}' from your perspective as {}.",
                FALLBACK_MARKER, actor.display_name, topic, actor.role_description
            ),
        ),
        None => ModeratorDecision::done(format!(
            "{}: no enabled actors are available. Ending discussion.",
            FALLBACK_MARKER
        )),
    };
    decision.with_source(DecisionSource::Fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn two_actor_roster() -> Roster {
        Roster::new(vec![
            ActorProfile::new("expert1", "Expert 1", "expert"),
            ActorProfile::new("questioner", "Questioner", "curious individual"),
        ])
        .unwrap()
    }

    fn decoded(actor: &str) -> SelectionDecode {
        SelectionDecode::Decoded {
            actor: actor.to_string(),
            reason: "go".to_string(),
        }
    }

    // ==================== validate_selection ====================

    #[test]
    fn test_valid_actor_accepted() {
        let roster = two_actor_roster();
        let decision = validate_selection(decoded("expert1"), &roster, None).unwrap();
        assert_eq!(decision, ModeratorDecision::actor("expert1", "go"));
    }

    #[test]
    fn test_case_insensitive_id_resolves_to_roster_id() {
        let roster = two_actor_roster();
        let decision = validate_selection(decoded("Questioner"), &roster, None).unwrap();
        assert_eq!(decision.actor_id().map(|id| id.as_str()), Some("questioner"));
    }

    #[test]
    fn test_done_accepted() {
        let roster = two_actor_roster();
        let decision = validate_selection(decoded("DONE"), &roster, None).unwrap();
        assert!(decision.is_done());
    }

    #[test]
    fn test_unknown_actor_rejected() {
        let roster = two_actor_roster();
        assert_eq!(
            validate_selection(decoded("expert9"), &roster, None),
            Err(SelectionFailure::UnknownActor("expert9".to_string()))
        );
    }

    #[test]
    fn test_disabled_actor_rejected() {
        let roster = Roster::new(vec![
            ActorProfile::new("expert1", "Expert 1", "expert"),
            ActorProfile::new("validator", "Validator", "checks").disabled(),
        ])
        .unwrap();
        assert!(matches!(
            validate_selection(decoded("validator"), &roster, None),
            Err(SelectionFailure::UnknownActor(_))
        ));
    }

    #[test]
    fn test_repeat_rejected_with_two_actors() {
        let roster = two_actor_roster();
        let previous = ActorId::new("expert1");
        assert_eq!(
            validate_selection(decoded("expert1"), &roster, Some(&previous)),
            Err(SelectionFailure::RepeatedSpeaker(previous.clone()))
        );
    }

    #[test]
    fn test_repeat_allowed_with_single_actor() {
        let roster = Roster::new(vec![ActorProfile::new("solo", "Solo", "alone")]).unwrap();
        let previous = ActorId::new("solo");
        let decision = validate_selection(decoded("solo"), &roster, Some(&previous)).unwrap();
        assert_eq!(decision.actor_id(), Some(&previous));
    }

    #[test]
    fn test_malformed_propagates() {
        let roster = two_actor_roster();
        assert!(matches!(
            validate_selection(SelectionDecode::Malformed("x".into()), &roster, None),
            Err(SelectionFailure::Malformed(_))
        ));
    }

    // ==================== fallback_selection ====================

    #[test]
    fn test_fallback_excludes_previous() {
        let roster = two_actor_roster();
        let previous = ActorId::new("expert1");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let decision = fallback_selection(&roster, Some(&previous), "tides", &mut rng);
            assert_eq!(decision.actor_id().map(|id| id.as_str()), Some("questioner"));
            assert!(decision.directive.starts_with(FALLBACK_MARKER));
            assert_eq!(decision.source, DecisionSource::Fallback);
        }
    }

    #[test]
    fn test_fallback_covers_all_candidates() {
        let roster = Roster::default_panel();
        let previous = ActorId::new("validator");
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let decision = fallback_selection(&roster, Some(&previous), "tides", &mut rng);
            let id = decision.actor_id().cloned().unwrap();
            assert_ne!(id, previous);
            seen.insert(id);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_fallback_single_actor_reselects() {
        let roster = Roster::new(vec![ActorProfile::new("solo", "Solo", "alone")]).unwrap();
        let previous = ActorId::new("solo");
        let mut rng = StdRng::seed_from_u64(1);
        let decision = fallback_selection(&roster, Some(&previous), "tides", &mut rng);
        assert_eq!(decision.actor_id(), Some(&previous));
    }

    #[test]
    fn test_fallback_empty_roster_is_done() {
        let roster = Roster::new(vec![
            ActorProfile::new("expert1", "Expert 1", "expert").disabled(),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let decision = fallback_selection(&roster, None, "tides", &mut rng);
        assert!(decision.is_done());
        assert_eq!(decision.source, DecisionSource::Fallback);
        assert!(decision.directive.contains(FALLBACK_MARKER));
    }
}
