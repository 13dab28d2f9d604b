//! Application layer for ai-panel
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ActorFailurePolicy, DiscussionSettings};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    discussion_observer::{
        CLOSED_TEXT, CallbackObserver, ChannelObserver, DiscussionEvent, DiscussionEventKind,
        DiscussionObserver, NoObserver, SYSTEM_LABEL,
    },
    llm_gateway::{GatewayError, LlmGateway},
};
pub use use_cases::actor::{Actor, TurnDirective};
pub use use_cases::moderator::{Moderator, SelectionRequest, SpeakerSelector};
pub use use_cases::run_discussion::{
    COMPLETE_NOTICE, DiscussionOrchestrator, INVALID_SELECTION_NOTICE, RunningDiscussion,
    STOPPED_NOTICE, StopHandle,
};
