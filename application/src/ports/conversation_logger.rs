//! Transcript port.
//!
//! Every milestone of a discussion (opening, moderator pick, actor reply,
//! actor failure, closing) is handed to a [`ConversationLogger`] as a JSON
//! record. Diagnostics stay on `tracing`; this port is the durable,
//! machine-readable side.

use serde_json::Value;

/// One transcript record
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    /// Record kind, such as `"actor_turn"`
    pub event_type: &'static str,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for transcript records.
///
/// Writing never fails from the caller's side: a broken sink must not end a
/// discussion.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every record
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
