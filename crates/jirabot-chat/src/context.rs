//! Conversation context management.
//!
//! Keeps the append-only turn history for a session and produces the
//! sliding window of recent turns that accompanies each model request.

use chrono::{DateTime, Local};
use uuid::Uuid;

use jirabot_core::{Role, Turn};

/// Number of recent turns sent to the model with each request.
pub const DEFAULT_CONTEXT_TURNS: usize = 5;

// =============================================================================
// ConversationManager
// =============================================================================

/// Append-only turn history with a fixed-size context window.
#[derive(Debug, Clone)]
pub struct ConversationManager {
    /// Maximum number of recent turns included in a model request.
    context_turns: usize,
    /// Optional cap on stored turns; oldest turns are evicted past it.
    history_limit: Option<usize>,
    history: Vec<Turn>,
}

impl Default for ConversationManager {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_TURNS)
    }
}

impl ConversationManager {
    /// Create a manager with unbounded history.
    pub fn new(context_turns: usize) -> Self {
        Self {
            context_turns,
            history_limit: None,
            history: Vec::new(),
        }
    }

    /// Cap the number of stored turns.
    ///
    /// The cap never goes below the window size, so windowing is unaffected.
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit.map(|l| l.max(self.context_turns));
        self.trim();
        self
    }

    /// Append a turn to the history.
    pub fn record(&mut self, role: Role, content: impl Into<String>) {
        self.history.push(Turn::new(role, content));
        self.trim();
    }

    /// The most recent `context_turns` turns, oldest first.
    pub fn windowed_context(&self) -> &[Turn] {
        let start = self.history.len().saturating_sub(self.context_turns);
        &self.history[start..]
    }

    /// Assemble the messages for a model request: the system turn, the
    /// windowed context, then `user_text` as the newest user turn.
    ///
    /// The system turn is not counted against the window.
    pub fn build_messages(&self, system: &str, user_text: &str) -> Vec<Turn> {
        let window = self.windowed_context();
        let mut messages = Vec::with_capacity(window.len() + 2);
        messages.push(Turn::system(system));
        messages.extend(window.iter().cloned());
        messages.push(Turn::user(user_text));
        messages
    }

    /// Every stored turn, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn context_turns(&self) -> usize {
        self.context_turns
    }

    fn trim(&mut self) {
        if let Some(limit) = self.history_limit {
            if self.history.len() > limit {
                let excess = self.history.len() - limit;
                self.history.drain(..excess);
            }
        }
    }
}

// =============================================================================
// ConversationSession
// =============================================================================

/// One interactive session: created when the assistant starts, dropped when
/// it exits. Owns the conversation history.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    pub id: Uuid,
    pub started_at: DateTime<Local>,
    pub context: ConversationManager,
}

impl ConversationSession {
    pub fn new(context: ConversationManager) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Local::now(),
            context,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
