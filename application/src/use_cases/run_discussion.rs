//! Run Discussion use case
//!
//! Drives the round loop: ask the moderator for a speaker, let that actor
//! respond, record the reply, repeat until the moderator is done, the round
//! limit is reached or a stop is requested.

use crate::config::{ActorFailurePolicy, DiscussionSettings};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::discussion_observer::{ChannelObserver, DiscussionEvent, DiscussionObserver};
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::actor::{Actor, TurnDirective};
use crate::use_cases::moderator::{Moderator, SelectionRequest, SpeakerSelector};
use panel_domain::util::preview;
use panel_domain::{
    CompletionReason, ConversationHistory, DecisionSource, DiscussionOutcome, DiscussionState,
    DiscussionStatus, DomainError, ModelConfig, NextSpeaker, PromptTemplate, RoundPolicy, Roster,
    Speaker, Topic,
};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Notice emitted when the moderator ends the discussion
pub const COMPLETE_NOTICE: &str = "Discussion complete. Topic has been thoroughly covered.";

/// Notice emitted when the selected speaker is not in the enabled roster
pub const INVALID_SELECTION_NOTICE: &str = "Invalid selection made. Ending discussion.";

/// Notice emitted when a stop request ends the discussion
pub const STOPPED_NOTICE: &str = "Discussion stopped.";

/// Cooperative stop flag shared between the worker and its controllers
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    /// Request a stop; takes effect after the current turn
    pub fn stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// A discussion running on its own task
pub struct RunningDiscussion<G: LlmGateway + ?Sized + 'static> {
    pub stop: StopHandle,
    pub events: mpsc::UnboundedReceiver<DiscussionEvent>,
    pub task: JoinHandle<(DiscussionOrchestrator<G>, DiscussionOutcome)>,
}

/// Owns the roster, the history and the moderator of one panel
pub struct DiscussionOrchestrator<G: LlmGateway + ?Sized + 'static> {
    roster: Roster,
    actors: Vec<Actor<G>>,
    selector: Box<dyn SpeakerSelector>,
    settings: DiscussionSettings,
    policy: RoundPolicy,
    history: ConversationHistory,
    status: DiscussionStatus,
    stop: StopHandle,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + ?Sized + 'static> DiscussionOrchestrator<G> {
    /// Build an orchestrator whose moderator and actors share one model
    pub fn new(
        gateway: Arc<G>,
        model: ModelConfig,
        roster: Roster,
        settings: DiscussionSettings,
    ) -> Result<Self, DomainError> {
        let policy = settings.round_policy()?;
        let actors = roster
            .enabled()
            .map(|profile| Actor::new(profile.clone(), model.clone(), Arc::clone(&gateway)))
            .collect();
        let moderator = Moderator::new(model, gateway);

        Ok(Self {
            roster,
            actors,
            selector: Box::new(moderator),
            settings,
            policy,
            history: ConversationHistory::new(),
            status: DiscussionStatus::Idle,
            stop: StopHandle::default(),
            logger: Arc::new(NoConversationLogger),
        })
    }

    // ==================== Builder Methods ====================

    pub fn with_selector(mut self, selector: impl SpeakerSelector + 'static) -> Self {
        self.selector = Box::new(selector);
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    // ==================== Accessors ====================

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn status(&self) -> DiscussionStatus {
        self.status
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn settings(&self) -> &DiscussionSettings {
        &self.settings
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Request a stop of the running discussion
    pub fn stop(&self) {
        self.stop.stop();
    }

    // ==================== Execution ====================

    /// Run a full discussion on the current task
    pub async fn start(
        &mut self,
        topic: &Topic,
        observer: &dyn DiscussionObserver,
    ) -> DiscussionOutcome {
        self.stop.reset();
        self.run(topic, observer).await
    }

    /// Run a discussion on a dedicated task.
    ///
    /// Events are delivered through an unbounded channel; the join handle
    /// gives the orchestrator back together with the outcome.
    pub fn spawn(mut self, topic: Topic) -> RunningDiscussion<G> {
        // Reset before handing out the handle so an early stop is not lost
        self.stop.reset();
        let stop = self.stop.clone();
        let (observer, events) = ChannelObserver::channel();

        let task = tokio::spawn(async move {
            let outcome = self.run(&topic, &observer).await;
            (self, outcome)
        });

        RunningDiscussion { stop, events, task }
    }

    async fn run(&mut self, topic: &Topic, observer: &dyn DiscussionObserver) -> DiscussionOutcome {
        self.history = ConversationHistory::new();
        self.selector.reset();
        self.status = DiscussionStatus::Running;

        let mut state = DiscussionState::new(self.policy);
        let mut turns = 0;

        info!(
            "Starting new discussion on topic: '{}' (max_rounds={}, actors={})",
            topic,
            self.policy.max_rounds(),
            self.actors.len()
        );

        let actor_ids: Vec<&str> = self.actors.iter().map(|a| a.profile().id.as_str()).collect();
        let start_text = PromptTemplate::start_message(topic.content());
        let sequence = self
            .history
            .append(Speaker::System, start_text.clone())
            .sequence();
        observer.on_event(&DiscussionEvent::started(start_text, sequence));
        self.logger.log(ConversationEvent::new(
            "discussion_started",
            json!({
                "topic": topic.content(),
                "max_rounds": self.policy.max_rounds(),
                "actors": actor_ids,
            }),
        ));

        let outcome = loop {
            if !state.has_rounds_left() {
                info!("Round limit reached");
                break DiscussionOutcome::Completed {
                    reason: CompletionReason::RoundLimit,
                    turns,
                };
            }
            if self.stop.is_stop_requested() {
                info!("Discussion stopped by request");
                observer.on_event(&DiscussionEvent::notice(STOPPED_NOTICE));
                break DiscussionOutcome::Stopped { turns };
            }

            let round = state.begin_round();
            info!("Starting round {}/{}", round.index, self.policy.max_rounds());

            let decision = self
                .selector
                .select_next(SelectionRequest {
                    topic,
                    roster: &self.roster,
                    history: &self.history,
                    round,
                })
                .await;

            self.logger.log(ConversationEvent::new(
                "moderator_decision",
                json!({
                    "round": round.index,
                    "next": decision.next.as_str(),
                    "directive": decision.directive,
                    "is_last_round": round.is_last_round,
                }),
            ));

            let actor_id = match decision.next {
                NextSpeaker::Done => match decision.source {
                    DecisionSource::Moderator => {
                        info!("Moderator ended the discussion: {}", decision.directive);
                        observer.on_event(&DiscussionEvent::notice(COMPLETE_NOTICE));
                        break DiscussionOutcome::Completed {
                            reason: CompletionReason::ModeratorDone,
                            turns,
                        };
                    }
                    DecisionSource::Fallback => {
                        warn!("No speaker available: {}", decision.directive);
                        observer.on_event(&DiscussionEvent::notice(decision.directive));
                        break DiscussionOutcome::Completed {
                            reason: CompletionReason::NoEligibleSpeaker,
                            turns,
                        };
                    }
                    DecisionSource::Failure => {
                        warn!("Moderator failed: {}", decision.directive);
                        observer.on_event(&DiscussionEvent::notice(decision.directive.clone()));
                        break DiscussionOutcome::Errored {
                            error: decision.directive,
                            turns,
                        };
                    }
                },
                NextSpeaker::Actor(id) => id,
            };

            let Some(actor) = self.actors.iter().find(|a| a.profile().id == actor_id) else {
                warn!("Selected actor '{}' is not in the enabled roster", actor_id);
                observer.on_event(&DiscussionEvent::notice(INVALID_SELECTION_NOTICE));
                break DiscussionOutcome::Completed {
                    reason: CompletionReason::InvalidSelection,
                    turns,
                };
            };
            let name = actor.profile().display_name.clone();

            if self.settings.announce_directives {
                observer.on_event(&DiscussionEvent::directive(
                    &name,
                    actor_id.clone(),
                    decision.directive.clone(),
                ));
            }

            let turn =
                TurnDirective::new(topic.content()).with_instruction(&decision.directive);
            match actor.respond(&turn, Some(&self.history)).await {
                Ok(reply) => {
                    debug!(
                        "Got response from {} ({} chars): {}",
                        actor_id,
                        reply.len(),
                        preview(&reply, 80)
                    );
                    let sequence = self
                        .history
                        .append(Speaker::Actor(actor_id.clone()), reply.clone())
                        .sequence();
                    turns += 1;
                    self.logger.log(ConversationEvent::new(
                        "actor_turn",
                        json!({
                            "round": round.index,
                            "actor": actor_id.as_str(),
                            "sequence": sequence,
                            "text": reply,
                        }),
                    ));
                    observer.on_event(&DiscussionEvent::turn(&name, actor_id, reply, sequence));
                }
                Err(e) => {
                    warn!("Actor {} failed to respond: {}", actor_id, e);
                    self.logger.log(ConversationEvent::new(
                        "actor_failed",
                        json!({
                            "round": round.index,
                            "actor": actor_id.as_str(),
                            "error": e.to_string(),
                        }),
                    ));
                    match self.settings.on_actor_failure {
                        ActorFailurePolicy::Abort => {
                            observer.on_event(&DiscussionEvent::notice(format!(
                                "{} failed to respond: {}. Ending discussion.",
                                name, e
                            )));
                            break DiscussionOutcome::Errored {
                                error: e.to_string(),
                                turns,
                            };
                        }
                        ActorFailurePolicy::Skip => {
                            observer.on_event(&DiscussionEvent::notice(format!(
                                "{} failed to respond: {}. Skipping this turn.",
                                name, e
                            )));
                        }
                    }
                }
            }
        };

        self.status = outcome.status();
        info!(
            "Discussion finished: {} after {} turn(s)",
            self.status,
            outcome.turns()
        );
        self.logger.log(ConversationEvent::new(
            "discussion_closed",
            json!({
                "outcome": outcome,
                "rounds": state.round_index(),
                "messages": self.history.len(),
            }),
        ));
        observer.on_event(&DiscussionEvent::closed(outcome.clone()));

        outcome
    }
}
