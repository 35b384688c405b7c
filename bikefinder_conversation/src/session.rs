//! Session state for multi-turn conversations.
//!
//! A session holds the message transcript plus the preferences accumulated
//! from every user message so far. Preferences survive across turns, which
//! lets the user refine a query incrementally ("under 2k" ... "make it
//! electric") instead of restating everything.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use bikefinder_core::{ChatMessage, PreferenceRecord, Role};

/// A conversation session with full message history.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    /// Session identifier
    pub id: Uuid,
    /// Session name (optional)
    pub name: Option<String>,
    /// Message history
    pub messages: Vec<ChatMessage>,
    /// Preferences merged from all turns so far
    pub preferences: PreferenceRecord,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl ConversationSession {
    /// Create a new empty conversation session.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: None,
            messages: Vec::new(),
            preferences: PreferenceRecord::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set session name.
    #[must_use]
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    /// Add a message to the session.
    pub fn add_message(&mut self, role: Role, content: String) {
        self.messages.push(ChatMessage { role, content });
        self.updated_at = Utc::now();
    }

    /// Get message count.
    #[must_use]
    pub const fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Check if session is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}
