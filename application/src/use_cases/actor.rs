//! Actor capability
//!
//! Turns one directive plus the shared context window into one in-character
//! reply. Actors are stateless between turns: the history is handed in
//! read-only by the orchestrator on every call.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use panel_domain::{ActorProfile, ConversationHistory, Message, ModelConfig, PromptTemplate};
use std::sync::Arc;
use tracing::debug;

/// What an actor is asked to do this turn
#[derive(Debug, Clone, Copy)]
pub struct TurnDirective<'a> {
    /// Task framing supplied by the moderator, if any
    pub instruction: Option<&'a str>,
    /// The current message the actor responds to
    pub message: &'a str,
}

impl<'a> TurnDirective<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            instruction: None,
            message,
        }
    }

    pub fn with_instruction(mut self, instruction: &'a str) -> Self {
        self.instruction = Some(instruction);
        self
    }
}

/// One conversational participant backed by an inference call
pub struct Actor<G: LlmGateway + ?Sized> {
    profile: ActorProfile,
    model: ModelConfig,
    gateway: Arc<G>,
}

impl<G: LlmGateway + ?Sized> Actor<G> {
    pub fn new(profile: ActorProfile, model: ModelConfig, gateway: Arc<G>) -> Self {
        Self {
            profile,
            model,
            gateway,
        }
    }

    pub fn profile(&self) -> &ActorProfile {
        &self.profile
    }

    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    pub fn gateway(&self) -> Arc<G> {
        Arc::clone(&self.gateway)
    }

    /// The context window this actor sees; empty when no history is bound
    pub fn get_context<'h>(&self, history: Option<&'h ConversationHistory>) -> &'h [Message] {
        history
            .map(ConversationHistory::context_window)
            .unwrap_or(&[])
    }

    pub fn build_prompt(
        &self,
        turn: &TurnDirective<'_>,
        history: Option<&ConversationHistory>,
    ) -> String {
        PromptTemplate::actor_prompt(
            &self.profile,
            turn.instruction,
            self.get_context(history),
            turn.message,
        )
    }

    /// Invoke the gateway exactly once and return the raw reply
    pub async fn respond(
        &self,
        turn: &TurnDirective<'_>,
        history: Option<&ConversationHistory>,
    ) -> Result<String, GatewayError> {
        let prompt = self.build_prompt(turn, history);
        debug!(
            "Prompting {} ({} chars)",
            self.profile.id,
            prompt.len()
        );
        self.gateway.complete(&self.model, &prompt).await
    }
}
