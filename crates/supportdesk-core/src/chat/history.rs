//! Append-only conversation history for one chat session.

use supportdesk_types::chat::{HistoryEntry, MessageRole};
use supportdesk_types::llm::Message;

/// Label for operator turns in the transcript buffer.
pub const HUMAN_PREFIX: &str = "Customer";
/// Label for model turns in the transcript buffer.
pub const AI_PREFIX: &str = "Support Agent";

/// Chronological record of user messages and model replies.
///
/// Entries are only ever appended, in pairs, after a successful exchange.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    entries: Vec<HistoryEntry>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one completed exchange.
    pub fn record_exchange(&mut self, user: impl Into<String>, reply: impl Into<String>) {
        self.entries.push(HistoryEntry::new(MessageRole::User, user));
        self.entries.push(HistoryEntry::new(MessageRole::Assistant, reply));
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of completed exchanges.
    pub fn turns(&self) -> usize {
        self.entries.len() / 2
    }

    /// History as provider messages, oldest first.
    pub fn messages(&self) -> Vec<Message> {
        self.entries
            .iter()
            .map(|e| Message {
                role: e.role,
                content: e.text.clone(),
            })
            .collect()
    }

    /// History as a `Customer:` / `Support Agent:` transcript.
    pub fn buffer(&self) -> String {
        self.entries
            .iter()
            .map(|e| {
                let prefix = match e.role {
                    MessageRole::User => HUMAN_PREFIX,
                    MessageRole::Assistant => AI_PREFIX,
                    MessageRole::System => "System",
                };
                format!("{prefix}: {}", e.text)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
