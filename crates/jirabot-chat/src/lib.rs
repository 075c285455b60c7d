//! Conversational interface for Jirabot.
//!
//! Routes typed commands, translates natural-language requests into JQL
//! with a language model, keeps the windowed conversation history, and
//! renders tracker results as display text.

pub mod command;
pub mod context;
pub mod error;
pub mod format;
pub mod orchestrator;
pub mod translator;

#[cfg(test)]
pub(crate) mod testing;

pub use command::Command;
pub use context::{ConversationManager, ConversationSession};
pub use error::ChatError;
pub use orchestrator::{ChatOrchestrator, Reply};
pub use translator::{QuerySource, QueryTranslator, Translation, DEFAULT_QUERY};
