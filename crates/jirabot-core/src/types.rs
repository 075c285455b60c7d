use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Conversation
// =============================================================================

/// Who produced a message in the conversation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Text typed by the person at the prompt.
    User,
    /// A completion returned by the language model.
    Assistant,
    /// Instructions that frame a model request.
    System,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
            Role::System => write!(f, "system"),
        }
    }
}

/// One message unit in the conversation history.
///
/// Turns are immutable once created: the fields are only readable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

// =============================================================================
// Issues
// =============================================================================

/// A read-only snapshot of an issue as returned by the tracker.
///
/// Timestamps are kept in the tracker's own string representation; the
/// display layer is responsible for reformatting them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue identifier, e.g. `ABC-123`.
    pub key: String,
    pub summary: String,
    /// Workflow status name, e.g. `In Progress`.
    pub status: String,
    /// Priority name. Trackers may leave priority unset.
    pub priority: Option<String>,
    pub created: String,
    pub updated: String,
    pub description: Option<String>,
}

/// The outcome of a structured-query search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub issues: Vec<Issue>,
    /// Total number of matches reported by the tracker, which may exceed
    /// `issues.len()` when the tracker paginates.
    pub total: u64,
}

impl SearchResults {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Issue fields requested from the tracker for listings and detail views.
pub const ISSUE_FIELDS: &[&str] = &[
    "summary",
    "status",
    "priority",
    "created",
    "updated",
    "description",
];
