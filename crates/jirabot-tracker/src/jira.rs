//! Jira REST (v2) implementation of [`IssueTracker`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use jirabot_core::config::TrackerConfig;
use jirabot_core::{Issue, SearchResults};

use crate::{IssueTracker, Result, TrackerError};

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<RawIssue>,
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawIssue {
    key: String,
    #[serde(default)]
    fields: RawFields,
}

#[derive(Debug, Default, Deserialize)]
struct RawFields {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    status: Option<Named>,
    #[serde(default)]
    priority: Option<Named>,
    #[serde(default)]
    created: Option<String>,
    #[serde(default)]
    updated: Option<String>,
    #[serde(default)]
    description: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

impl From<RawIssue> for Issue {
    fn from(raw: RawIssue) -> Self {
        let fields = raw.fields;
        Issue {
            key: raw.key,
            summary: fields.summary.unwrap_or_default(),
            status: fields.status.map(|s| s.name).unwrap_or_default(),
            priority: fields.priority.map(|p| p.name),
            created: fields.created.unwrap_or_default(),
            updated: fields.updated.unwrap_or_default(),
            description: fields.description.and_then(description_text),
        }
    }
}

/// Plain text of a description field.
///
/// v2 returns a string; instances configured for rich text return an
/// Atlassian document tree, whose `text` leaves are joined in order.
fn description_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Object(_) => {
            let mut parts = Vec::new();
            collect_text(&value, &mut parts);
            let text = parts.join("");
            (!text.trim().is_empty()).then_some(text)
        }
        _ => None,
    }
}

fn collect_text(node: &Value, out: &mut Vec<String>) {
    if let Some(text) = node.get("text").and_then(Value::as_str) {
        out.push(text.to_string());
    }
    if let Some(children) = node.get("content").and_then(Value::as_array) {
        for child in children {
            collect_text(child, out);
        }
        if node.get("type").and_then(Value::as_str) == Some("paragraph") {
            out.push("\n".to_string());
        }
    }
}

// =============================================================================
// JiraClient
// =============================================================================

/// HTTP client for a Jira site.
pub struct JiraClient {
    base_url: Url,
    email: Option<String>,
    api_token: Option<String>,
    max_results: u32,
    client: reqwest::Client,
}

impl JiraClient {
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TrackerError::Transport(format!("invalid base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(TrackerError::Transport(format!(
                "invalid base URL: {}",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            email: config.email.clone(),
            api_token: config.api_token.clone(),
            max_results: config.max_results,
            client,
        })
    }

    /// Build `{base}/rest/api/2/{segments...}` with each segment escaped.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["rest", "api", "2"]).extend(segments);
        }
        url
    }

    fn get(&self, url: Url) -> reqwest::RequestBuilder {
        let request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");
        match (&self.email, &self.api_token) {
            (Some(email), Some(token)) => request.basic_auth(email, Some(token)),
            (None, Some(token)) => request.bearer_auth(token),
            _ => request,
        }
    }

    async fn error_for(response: reqwest::Response) -> TrackerError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TrackerError::Auth(body),
            _ => TrackerError::Status {
                status: status.as_u16(),
                body,
            },
        }
    }
}

#[async_trait]
impl IssueTracker for JiraClient {
    async fn search(&self, query: &str, fields: &[&str]) -> Result<SearchResults> {
        let url = self.endpoint(&["search"]);
        debug!(jql = %query, "Searching issues");

        let response = self
            .get(url)
            .query(&[
                ("jql", query.to_string()),
                ("fields", fields.join(",")),
                ("maxResults", self.max_results.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| TrackerError::Parse(e.to_string()))?;

        let issues: Vec<Issue> = body.issues.into_iter().map(Issue::from).collect();
        let total = body.total.unwrap_or(issues.len() as u64);
        info!(returned = issues.len(), total, "Search complete");

        Ok(SearchResults { issues, total })
    }

    async fn get_issue(&self, key: &str, fields: &[&str]) -> Result<Issue> {
        let url = self.endpoint(&["issue", key]);
        debug!(key = %key, "Fetching issue");

        let response = self
            .get(url)
            .query(&[("fields", fields.join(","))])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(TrackerError::NotFound(key.to_string()));
        }
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let raw: RawIssue = response
            .json()
            .await
            .map_err(|e| TrackerError::Parse(e.to_string()))?;
        Ok(raw.into())
    }
}
