//! Issue-tracker access.
//!
//! Exposes the two access patterns the chat layer needs (search by
//! structured query, fetch by identifier) behind the [`IssueTracker`] trait,
//! plus a Jira REST implementation.

use async_trait::async_trait;

use jirabot_core::{Issue, SearchResults};

pub mod error;
pub mod jira;

pub use error::TrackerError;
pub use jira::JiraClient;

/// Result type for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Read-only access to an issue tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Run a structured query, returning matching issues and the total count.
    async fn search(&self, query: &str, fields: &[&str]) -> Result<SearchResults>;

    /// Fetch a single issue by identifier.
    ///
    /// Returns [`TrackerError::NotFound`] when the tracker has no such issue.
    async fn get_issue(&self, key: &str, fields: &[&str]) -> Result<Issue>;
}
