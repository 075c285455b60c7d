//! Error types for the conversational interface.

use jirabot_core::JirabotError;
use jirabot_llm::LlmError;
use jirabot_tracker::TrackerError;

/// Errors raised while setting up a chat session.
///
/// Once a session is running, failures are degraded into replies instead.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("configuration error: {0}")]
    Config(#[from] JirabotError),
    #[error("language model error: {0}")]
    Llm(#[from] LlmError),
    #[error("issue tracker error: {0}")]
    Tracker(#[from] TrackerError),
}
