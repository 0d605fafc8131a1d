//! CH-01 Conversation Session — in-memory turn history for one chat view.
//!
//! Created when a chat view opens, dropped when it closes; nothing is
//! persisted. Mutation is append-only and the session has a single `&mut`
//! owner, so a partially-appended turn is never observable and requests are
//! naturally serialized per session.

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

use crate::compose;
use crate::models::{ConversationTurn, MessageRole};

pub struct ConversationSession {
    id: Uuid,
    started_at: NaiveDateTime,
    turns: Vec<ConversationTurn>,
}

impl ConversationSession {
    /// Start an empty session.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Local::now().naive_local(),
            turns: Vec::new(),
        }
    }

    /// Start a session seeded with the assistant's welcome greeting, the way
    /// the chat view opens.
    pub fn with_welcome() -> Self {
        let mut session = Self::new();
        session.append_assistant(&compose::welcome_message());
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> NaiveDateTime {
        self.started_at
    }

    /// Append a user turn.
    pub fn append_user(&mut self, text: &str) -> &ConversationTurn {
        self.append(MessageRole::User, text)
    }

    /// Append an assistant turn.
    pub fn append_assistant(&mut self, text: &str) -> &ConversationTurn {
        self.append(MessageRole::Assistant, text)
    }

    /// Turns in strict insertion order.
    pub fn history(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// Display title derived from the first user turn.
    /// Truncates at 50 characters with "..." if longer.
    pub fn title(&self) -> String {
        let first = self
            .turns
            .iter()
            .find(|t| t.role == MessageRole::User)
            .map(|t| t.content.trim())
            .unwrap_or("");
        if first.is_empty() {
            return "New conversation".to_string();
        }
        if first.chars().count() <= 50 {
            first.to_string()
        } else {
            let truncated: String = first.chars().take(50).collect();
            format!("{truncated}...")
        }
    }

    fn append(&mut self, role: MessageRole, text: &str) -> &ConversationTurn {
        let turn = ConversationTurn {
            id: Uuid::new_v4(),
            role,
            content: text.to_string(),
            timestamp: self.next_timestamp(),
        };
        self.turns.push(turn);
        self.turns.last().expect("just pushed")
    }

    /// Wall clock may step backwards; timestamps within a session must not.
    fn next_timestamp(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        match self.turns.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        }
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}
