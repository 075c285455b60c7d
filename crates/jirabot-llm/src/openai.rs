use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use jirabot_core::config::LlmConfig;

use crate::{CompletionRequest, LanguageModel, LlmError, Result};

/// Client for OpenAI-compatible `/chat/completions` endpoints.
pub struct OpenAiClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::Auth("no API key configured".to_string()))?;

        let url = format!("{}/chat/completions", self.base_url);

        let api_messages: Vec<_> = request
            .messages
            .iter()
            .map(|turn| {
                json!({
                    "role": turn.role().to_string(),
                    "content": turn.content(),
                })
            })
            .collect();

        let payload = json!({
            "model": self.model,
            "messages": api_messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        debug!(
            model = %self.model,
            messages = api_messages.len(),
            "Requesting chat completion"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => LlmError::Auth(body),
                429 => LlmError::RateLimited,
                code => LlmError::Status { status: code, body },
            });
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let content = data
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| LlmError::Parse("no message content in response".to_string()))?;

        if content.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        Ok(content.to_string())
    }
}
