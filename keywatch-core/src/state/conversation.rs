use crate::classify::Direction;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationMessage {
    pub text: String,
    pub direction: Direction,
    pub timestamp: DateTime<Local>,
}

/// Curated operator-facing history. Append-only.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ConversationMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: impl Into<String>, direction: Direction) {
        self.append_at(text, direction, Local::now())
    }

    pub fn append_at(
        &mut self,
        text: impl Into<String>,
        direction: Direction,
        timestamp: DateTime<Local>,
    ) {
        self.messages.push(ConversationMessage {
            text: text.into(),
            direction,
            timestamp,
        });
    }

    pub fn last(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// The `n` most recent messages, oldest first.
    pub fn tail(&self, n: usize) -> &[ConversationMessage] {
        &self.messages[self.messages.len().saturating_sub(n)..]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
