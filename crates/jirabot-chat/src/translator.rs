//! Natural-language to JQL translation.
//!
//! A fixed few-shot prompt plus the windowed conversation history is sent to
//! the language model; its trimmed reply is used as the query. Any failure
//! yields [`DEFAULT_QUERY`] instead of an error.

use tracing::{debug, warn};

use jirabot_core::config::LlmConfig;
use jirabot_core::Role;
use jirabot_llm::{CompletionRequest, LanguageModel};

use crate::context::ConversationManager;

/// All issues assigned to the current user, newest first.
pub const DEFAULT_QUERY: &str = "assignee = currentUser() ORDER BY created DESC";

/// Few-shot instructions establishing the JQL surface syntax.
pub const SYSTEM_PROMPT: &str = "\
You are a Jira query expert. Convert natural language queries to JQL (Jira Query Language).
Only respond with the JQL query, nothing else.
Examples:
Input: \"show me all high priority bugs assigned to me\"
Output: assignee = currentUser() AND priority = High AND type = Bug ORDER BY created DESC
Input: \"what are my open tasks\"
Output: assignee = currentUser() AND status = \"Open\" ORDER BY created DESC
Input: \"show my latest issues\"
Output: assignee = currentUser() ORDER BY created DESC
Input: \"find issues created today\"
Output: assignee = currentUser() AND created >= startOfDay() ORDER BY created DESC";

/// Where a translated query came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySource {
    /// Produced by the language model.
    Model,
    /// The model call failed; [`DEFAULT_QUERY`] was substituted.
    Fallback,
}

/// A structured query ready to hand to the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub query: String,
    pub source: QuerySource,
}

impl Translation {
    fn fallback() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            source: QuerySource::Fallback,
        }
    }
}

/// Turns free-text instructions into JQL using a language model.
#[derive(Debug, Clone)]
pub struct QueryTranslator {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for QueryTranslator {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 150,
        }
    }
}

impl QueryTranslator {
    pub fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(config.temperature, config.max_tokens)
    }

    /// Translate `instruction` into a query.
    ///
    /// On success the instruction and the raw model reply are appended to
    /// `context` as a user/assistant pair. On failure nothing is recorded and
    /// the default query is returned.
    pub async fn translate(
        &self,
        model: &dyn LanguageModel,
        context: &mut ConversationManager,
        instruction: &str,
    ) -> Translation {
        let request = CompletionRequest::new(context.build_messages(SYSTEM_PROMPT, instruction))
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);

        let raw = match model.complete(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(provider = model.name(), error = %e, "Query translation failed, using default query");
                return Translation::fallback();
            }
        };

        let query = raw.trim();
        if query.is_empty() {
            warn!(provider = model.name(), "Model returned a blank query, using default query");
            return Translation::fallback();
        }

        context.record(Role::User, instruction);
        context.record(Role::Assistant, raw.as_str());
        debug!(jql = %query, "Translated instruction");

        Translation {
            query: query.to_string(),
            source: QuerySource::Model,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
