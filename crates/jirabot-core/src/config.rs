use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{JirabotError, Result};

/// Top-level configuration for Jirabot.
///
/// Loaded from `~/.jirabot/config.toml` by default. Credentials are usually
/// supplied through the environment instead, see
/// [`JirabotConfig::apply_env_overrides`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JirabotConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl JirabotConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: JirabotConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| JirabotError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Overlay credentials and endpoints from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// Overlay values from an arbitrary variable lookup.
    ///
    /// Empty values are ignored so an exported-but-blank variable does not
    /// wipe a value from the config file.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("JIRA_BASE_URL") {
            self.tracker.base_url = v;
        }
        if let Some(v) = get("JIRA_EMAIL") {
            self.tracker.email = Some(v);
        }
        if let Some(v) = get("JIRA_API_TOKEN") {
            self.tracker.api_token = Some(v);
        }
        if let Some(v) = get("OPENAI_API_KEY") {
            self.llm.api_key = Some(v);
        }
        if let Some(v) = get("OPENAI_BASE_URL") {
            self.llm.base_url = v;
        }
        if let Some(v) = get("OPENAI_MODEL") {
            self.llm.model = v;
        }
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Issue tracker connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Site root, e.g. `https://example.atlassian.net`.
    pub base_url: String,
    /// Account email used for basic auth.
    pub email: Option<String>,
    /// API token paired with `email`.
    pub api_token: Option<String>,
    /// Page size requested from the search endpoint.
    pub max_results: u32,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            email: None,
            api_token: None,
            max_results: 50,
            timeout_secs: 30,
        }
    }
}

/// Language-model backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API.
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub temperature: f32,
    /// Response length cap in tokens.
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key: None,
            temperature: 0.7,
            max_tokens: 150,
            timeout_secs: 30,
        }
    }
}

/// Conversation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Number of most recent turns sent to the model with each request.
    pub context_turns: usize,
    /// Optional cap on stored turns. `None` keeps the whole session.
    pub history_limit: Option<usize>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            context_turns: 5,
            history_limit: None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
