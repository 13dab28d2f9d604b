//! Discussion event port
//!
//! Defines the events a running discussion emits and the observer interface
//! front-ends implement to receive them.

use panel_domain::{ActorId, DiscussionOutcome};
use tokio::sync::mpsc;

/// Speaker label used for system notices
pub const SYSTEM_LABEL: &str = "System";

/// Text of the terminal event every discussion ends with
pub const CLOSED_TEXT: &str = "Discussion closed.";

/// What an emitted event represents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscussionEventKind {
    /// The opening system message
    Started { sequence: u64 },
    /// The moderator's instruction to the next speaker (only when announced)
    Directive { actor: ActorId },
    /// A recorded actor reply
    Turn { actor: ActorId, sequence: u64 },
    /// Completion, fault or failure notice
    Notice,
    /// Nothing else will follow
    Closed { outcome: DiscussionOutcome },
}

/// One `(speaker_label, text)` emission plus its meaning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscussionEvent {
    pub speaker: String,
    pub text: String,
    pub kind: DiscussionEventKind,
}

impl DiscussionEvent {
    pub fn started(text: impl Into<String>, sequence: u64) -> Self {
        Self {
            speaker: SYSTEM_LABEL.to_string(),
            text: text.into(),
            kind: DiscussionEventKind::Started { sequence },
        }
    }

    pub fn directive(actor_name: &str, actor: ActorId, text: impl Into<String>) -> Self {
        Self {
            speaker: format!("Moderator to {}", actor_name),
            text: text.into(),
            kind: DiscussionEventKind::Directive { actor },
        }
    }

    pub fn turn(actor_name: &str, actor: ActorId, text: impl Into<String>, sequence: u64) -> Self {
        Self {
            speaker: actor_name.to_string(),
            text: text.into(),
            kind: DiscussionEventKind::Turn { actor, sequence },
        }
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self {
            speaker: SYSTEM_LABEL.to_string(),
            text: text.into(),
            kind: DiscussionEventKind::Notice,
        }
    }

    pub fn closed(outcome: DiscussionOutcome) -> Self {
        Self {
            speaker: SYSTEM_LABEL.to_string(),
            text: CLOSED_TEXT.to_string(),
            kind: DiscussionEventKind::Closed { outcome },
        }
    }

    /// History sequence number of the message behind this event, if any
    pub fn sequence(&self) -> Option<u64> {
        match &self.kind {
            DiscussionEventKind::Started { sequence }
            | DiscussionEventKind::Turn { sequence, .. } => Some(*sequence),
            _ => None,
        }
    }

    pub fn is_turn(&self) -> bool {
        matches!(self.kind, DiscussionEventKind::Turn { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.kind, DiscussionEventKind::Closed { .. })
    }
}

/// Receives discussion events.
///
/// Called synchronously on the discussion worker; a slow observer delays the
/// round loop. Use [`ChannelObserver`] when the consumer must not block it.
pub trait DiscussionObserver: Send + Sync {
    fn on_event(&self, event: &DiscussionEvent);
}

/// No-op observer
pub struct NoObserver;

impl DiscussionObserver for NoObserver {
    fn on_event(&self, _event: &DiscussionEvent) {}
}

/// Adapts a plain `(speaker_label, text)` callback
pub struct CallbackObserver<F> {
    callback: F,
}

impl<F> CallbackObserver<F>
where
    F: Fn(&str, &str) + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> DiscussionObserver for CallbackObserver<F>
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn on_event(&self, event: &DiscussionEvent) {
        (self.callback)(&event.speaker, &event.text);
    }
}

/// Queues events on an unbounded channel drained by the presentation layer
pub struct ChannelObserver {
    sender: mpsc::UnboundedSender<DiscussionEvent>,
}

impl ChannelObserver {
    /// Create the observer together with the receiving end of its queue
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DiscussionEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl DiscussionObserver for ChannelObserver {
    fn on_event(&self, event: &DiscussionEvent) {
        // A dropped receiver only means nobody is watching anymore
        let _ = self.sender.send(event.clone());
    }
}
