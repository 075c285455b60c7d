use thiserror::Error;

/// Top-level error type for Jirabot.
///
/// Subsystem crates (`jirabot-llm`, `jirabot-tracker`, `jirabot-chat`) define
/// their own error enums; this one covers what is shared: configuration,
/// file I/O and serialization.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JirabotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for JirabotError {
    fn from(err: toml::de::Error) -> Self {
        JirabotError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for JirabotError {
    fn from(err: toml::ser::Error) -> Self {
        JirabotError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for JirabotError {
    fn from(err: serde_json::Error) -> Self {
        JirabotError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Jirabot operations.
pub type Result<T> = std::result::Result<T, JirabotError>;
