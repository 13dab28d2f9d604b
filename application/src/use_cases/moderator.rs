//! Moderator: picks the next speaker each round.
//!
//! The moderator is itself an [`Actor`] prompted with the selection
//! instruction. Its answer goes through decode, validation and, when either
//! fails, a random fallback, so [`SpeakerSelector::select_next`] never fails.

use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::actor::{Actor, TurnDirective};
use async_trait::async_trait;
use panel_domain::{
    ActorId, ActorProfile, ConversationHistory, ModelConfig, ModeratorDecision, PromptTemplate,
    RoundInfo, Roster, Topic, decode_selection, fallback_selection, validate_selection,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Task framing for the moderator's own prompt
const SELECTION_FRAMING: &str =
    "Decide who should speak next and give them a clear instruction.";

/// Everything the selector needs to know about the current round
#[derive(Debug, Clone, Copy)]
pub struct SelectionRequest<'a> {
    pub topic: &'a Topic,
    pub roster: &'a Roster,
    pub history: &'a ConversationHistory,
    pub round: RoundInfo,
}

/// Chooses who speaks next.
///
/// Implementations must always produce a decision; failures turn into a
/// fallback pick or `done`.
#[async_trait]
pub trait SpeakerSelector: Send {
    async fn select_next(&mut self, request: SelectionRequest<'_>) -> ModeratorDecision;

    /// The actor chosen in the most recent actor decision
    fn previous_speaker(&self) -> Option<&ActorId>;

    /// Forget the previous speaker before a new discussion
    fn reset(&mut self);
}

/// LLM-backed speaker selector
pub struct Moderator<G: LlmGateway + ?Sized> {
    actor: Actor<G>,
    rng: StdRng,
    previous: Option<ActorId>,
}

impl<G: LlmGateway + ?Sized> Moderator<G> {
    pub fn new(model: ModelConfig, gateway: Arc<G>) -> Self {
        Self {
            actor: Actor::new(ActorProfile::moderator(), model, gateway),
            rng: StdRng::from_entropy(),
            previous: None,
        }
    }

    /// Make fallback picks reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn profile(&self) -> &ActorProfile {
        self.actor.profile()
    }
}

#[async_trait]
impl<G: LlmGateway + ?Sized + 'static> SpeakerSelector for Moderator<G> {
    async fn select_next(&mut self, request: SelectionRequest<'_>) -> ModeratorDecision {
        let instruction = PromptTemplate::moderator_selection(
            request.topic.content(),
            request.roster.enabled(),
            self.previous.as_ref(),
            request.round.is_last_round,
            request.round.is_brief,
        );
        let turn = TurnDirective::new(&instruction).with_instruction(SELECTION_FRAMING);

        let response = match self.actor.respond(&turn, Some(request.history)).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Moderator inference failed: {}", e);
                return ModeratorDecision::failed(format!(
                    "An error occurred while selecting the next speaker: {}. Ending discussion.",
                    e
                ));
            }
        };
        debug!("Moderator raw response: {}", response);

        let decision = match validate_selection(
            decode_selection(&response),
            request.roster,
            self.previous.as_ref(),
        ) {
            Ok(decision) => decision,
            Err(failure) => {
                warn!("Unusable moderator selection ({}), using fallback", failure);
                fallback_selection(
                    request.roster,
                    self.previous.as_ref(),
                    request.topic.content(),
                    &mut self.rng,
                )
            }
        };

        if let Some(id) = decision.actor_id() {
            self.previous = Some(id.clone());
        }
        info!("Moderator has chosen {}: {}", decision.next, decision.directive);

        decision
    }

    fn previous_speaker(&self) -> Option<&ActorId> {
        self.previous.as_ref()
    }

    fn reset(&mut self) {
        self.previous = None;
    }
}
