//! Chat orchestrator: central coordinator wiring command parsing,
//! translation, issue retrieval and formatting.

use std::sync::Arc;

use tracing::{debug, info, warn};

use jirabot_core::{JirabotConfig, SearchResults, ISSUE_FIELDS};
use jirabot_llm::{LanguageModel, OpenAiClient};
use jirabot_tracker::{IssueTracker, JiraClient};

use crate::command::Command;
use crate::context::{ConversationManager, ConversationSession};
use crate::error::ChatError;
use crate::format;
use crate::translator::{QueryTranslator, Translation, DEFAULT_QUERY};

/// What the caller should do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text to display.
    Message(String),
    /// A rendered search listing, with the translation that produced the
    /// query when the input was natural language.
    Listing {
        translation: Option<Translation>,
        body: String,
    },
    /// The user asked to leave.
    Exit,
    /// Nothing to display (blank input).
    Nothing,
}

impl Reply {
    /// Plain-text rendering, or `None` when there is nothing to show.
    pub fn text(&self) -> Option<String> {
        match self {
            Reply::Message(text) => Some(text.clone()),
            Reply::Listing {
                translation: Some(t),
                body,
            } => Some(format!("Generated JQL: {}\n\n{}", t.query, body)),
            Reply::Listing {
                translation: None,
                body,
            } => Some(body.clone()),
            Reply::Exit | Reply::Nothing => None,
        }
    }
}

/// Owns one conversation session and its collaborators.
pub struct ChatOrchestrator {
    session: ConversationSession,
    translator: QueryTranslator,
    model: Arc<dyn LanguageModel>,
    tracker: Arc<dyn IssueTracker>,
}

impl ChatOrchestrator {
    /// Create an orchestrator around explicit collaborators.
    pub fn new(
        config: &JirabotConfig,
        model: Arc<dyn LanguageModel>,
        tracker: Arc<dyn IssueTracker>,
    ) -> Self {
        let context = ConversationManager::new(config.chat.context_turns)
            .with_history_limit(config.chat.history_limit);
        let session = ConversationSession::new(context);
        info!(session_id = %session.id, provider = model.name(), "Chat session started");

        Self {
            session,
            translator: QueryTranslator::from_config(&config.llm),
            model,
            tracker,
        }
    }

    /// Create an orchestrator with the HTTP backends described by `config`.
    pub fn from_config(config: &JirabotConfig) -> Result<Self, ChatError> {
        let model = OpenAiClient::new(&config.llm)?;
        let tracker = JiraClient::new(&config.tracker)?;
        Ok(Self::new(config, Arc::new(model), Arc::new(tracker)))
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    /// Handle one line of user input. Never fails: collaborator errors are
    /// rendered into the reply.
    pub async fn handle(&mut self, input: &str) -> Reply {
        let command = Command::parse(input);
        debug!(session_id = %self.session.id, command = ?command, "Dispatching command");
        self.dispatch(command).await
    }

    pub async fn dispatch(&mut self, command: Command) -> Reply {
        match command {
            Command::ListIssues => self.list_issues().await,
            Command::Details(key) => self.issue_details(&key).await,
            Command::Help => Reply::Message(format::help_text()),
            Command::Exit => Reply::Exit,
            Command::Empty => Reply::Nothing,
            Command::NaturalLanguage(text) => self.natural_language_query(&text).await,
        }
    }

    /// The fixed "my issues" listing. No model call is made.
    pub async fn list_issues(&self) -> Reply {
        let results = self.search(DEFAULT_QUERY).await;
        Reply::Listing {
            translation: None,
            body: format::format_listing(&results),
        }
    }

    /// Translate `text` into a query, run it and render the results.
    pub async fn natural_language_query(&mut self, text: &str) -> Reply {
        let translation = self
            .translator
            .translate(self.model.as_ref(), &mut self.session.context, text)
            .await;
        info!(jql = %translation.query, source = ?translation.source, "Generated query");

        let results = self.search(&translation.query).await;
        Reply::Listing {
            translation: Some(translation),
            body: format::format_listing(&results),
        }
    }

    pub async fn issue_details(&self, key: &str) -> Reply {
        let outcome = self.tracker.get_issue(key, ISSUE_FIELDS).await;
        if let Err(e) = &outcome {
            if e.is_not_found() {
                warn!(key = %key, "Issue not found");
            } else {
                warn!(key = %key, error = %e, "Issue fetch failed");
            }
        }
        Reply::Message(format::format_details(key, &outcome))
    }

    /// Search, degrading any tracker failure to an empty result set.
    async fn search(&self, query: &str) -> SearchResults {
        match self.tracker.search(query, ISSUE_FIELDS).await {
            Ok(results) => results,
            Err(e) => {
                warn!(jql = %query, error = %e, "Issue search failed");
                SearchResults::empty()
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
