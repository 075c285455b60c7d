//! Scripted in-memory collaborators for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use jirabot_core::{Issue, SearchResults};
use jirabot_llm::{CompletionRequest, LanguageModel, LlmError};
use jirabot_tracker::{IssueTracker, TrackerError};

/// Language model that replays queued outcomes and records every request.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedModel {
    pub fn replying(replies: impl IntoIterator<Item = Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::Network("no scripted reply".to_string())))
    }
}

/// Tracker backed by a fixed issue set. Records every search query.
#[derive(Default)]
pub struct FakeTracker {
    pub issues: HashMap<String, Issue>,
    pub search_result: Option<SearchResults>,
    pub fail_with_transport: bool,
    pub queries: Mutex<Vec<String>>,
}

impl FakeTracker {
    pub fn with_issues(issues: Vec<Issue>) -> Self {
        let results = SearchResults {
            total: issues.len() as u64,
            issues: issues.clone(),
        };
        Self {
            issues: issues.into_iter().map(|i| (i.key.clone(), i)).collect(),
            search_result: Some(results),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_with_transport: true,
            ..Self::default()
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn search(&self, query: &str, _fields: &[&str]) -> Result<SearchResults, TrackerError> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail_with_transport {
            return Err(TrackerError::Transport("connection refused".to_string()));
        }
        Ok(self.search_result.clone().unwrap_or_default())
    }

    async fn get_issue(&self, key: &str, _fields: &[&str]) -> Result<Issue, TrackerError> {
        if self.fail_with_transport {
            return Err(TrackerError::Transport("connection refused".to_string()));
        }
        self.issues
            .get(key)
            .cloned()
            .ok_or_else(|| TrackerError::NotFound(key.to_string()))
    }
}

pub fn sample_issue(key: &str) -> Issue {
    Issue {
        key: key.to_string(),
        summary: format!("Summary of {}", key),
        status: "In Progress".to_string(),
        priority: Some("High".to_string()),
        created: "2024-01-15T10:30:00.000+0000".to_string(),
        updated: "2024-01-16T08:05:09.000+0000".to_string(),
        description: Some(format!("Description of {}", key)),
    }
}
