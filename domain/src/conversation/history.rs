//! Append-only conversation history

use crate::conversation::CONTEXT_WINDOW;
use crate::conversation::message::{Message, Speaker};

/// Ordered log of the messages of one discussion.
///
/// Messages are only ever appended; sequence numbers start at 0 and grow by one
/// per append. Starting a new discussion means starting a new history.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return a reference to the stored entry
    pub fn append(&mut self, speaker: Speaker, text: impl Into<String>) -> &Message {
        let sequence = self.messages.len() as u64;
        self.messages.push(Message::new(speaker, text.into(), sequence));
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent `size` messages, oldest first
    pub fn recent(&self, size: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(size);
        &self.messages[start..]
    }

    /// The context window shown to actors
    pub fn context_window(&self) -> &[Message] {
        self.recent(CONTEXT_WINDOW)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::profile::ActorId;

    fn history_of(n: usize) -> ConversationHistory {
        let mut history = ConversationHistory::new();
        for i in 0..n {
            history.append(Speaker::System, format!("Message {}", i));
        }
        history
    }

    #[test]
    fn test_sequence_numbers_strictly_increase() {
        let mut history = ConversationHistory::new();
        let first = history.append(Speaker::System, "start").sequence();
        let second = history
            .append(Speaker::Actor(ActorId::new("expert1")), "reply")
            .sequence();
        assert_eq!(first, 0);
        assert_eq!(second, 1);
    }

    #[test]
    fn test_context_window_bound() {
        for n in 0..9 {
            let history = history_of(n);
            let window = history.context_window();
            assert_eq!(window.len(), n.min(CONTEXT_WINDOW));
            if let Some(last) = window.last() {
                assert_eq!(last.text(), format!("Message {}", n - 1));
            }
        }
    }

    #[test]
    fn test_context_window_keeps_order() {
        let history = history_of(10);
        let texts: Vec<_> = history.context_window().iter().map(|m| m.text()).collect();
        assert_eq!(
            texts,
            vec!["Message 5", "Message 6", "Message 7", "Message 8", "Message 9"]
        );
    }

    #[test]
    fn test_empty_history() {
        let history = ConversationHistory::new();
        assert!(history.is_empty());
        assert!(history.context_window().is_empty());
        assert!(history.last().is_none());
    }
}
