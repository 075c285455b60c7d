//! Display formatting for issues, listings and help.
//!
//! Everything here is pure string shaping; styling is left to the terminal
//! layer.

use chrono::NaiveDateTime;

use jirabot_core::{Issue, SearchResults};
use jirabot_tracker::TrackerError;

const TRACKER_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S";
const DISPLAY_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";
const SEPARATOR_WIDTH: usize = 50;

/// Reformat a tracker timestamp such as `2024-01-15T10:30:00.000+0000` as
/// `2024-01-15 10:30:00`.
///
/// Only the first 19 characters are parsed, so fractional seconds and the
/// offset are dropped. Anything that does not parse is returned unchanged,
/// which makes the function idempotent on its own output.
pub fn format_timestamp(raw: &str) -> String {
    raw.get(..19)
        .and_then(|prefix| NaiveDateTime::parse_from_str(prefix, TRACKER_TIMESTAMP).ok())
        .map(|dt| dt.format(DISPLAY_TIMESTAMP).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Render one issue as a labelled multi-line block.
pub fn format_issue(issue: &Issue, include_description: bool) -> String {
    let mut lines = vec![
        format!("Issue Key: {}", issue.key),
        format!("Summary: {}", issue.summary),
        format!("Status: {}", issue.status),
        format!("Priority: {}", issue.priority.as_deref().unwrap_or("None")),
        format!("Created: {}", format_timestamp(&issue.created)),
        format!("Updated: {}", format_timestamp(&issue.updated)),
    ];

    if include_description {
        if let Some(description) = issue.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(format!("Description: {}", description));
        }
    }

    lines.join("\n")
}

/// Render a search result set: a count header followed by one block per
/// issue, without descriptions.
///
/// The "nothing found" rendering is driven by the returned issues alone, so a
/// positive `total` with an empty page still reads as zero matches.
pub fn format_listing(results: &SearchResults) -> String {
    if results.is_empty() {
        return "Found 0 issue(s):\nNo issues found matching your query.".to_string();
    }

    let mut out = vec![format!("Found {} issue(s):", results.total)];
    let separator = "-".repeat(SEPARATOR_WIDTH);
    for issue in &results.issues {
        out.push(String::new());
        out.push(format_issue(issue, false));
        out.push(separator.clone());
    }
    out.join("\n")
}

/// Render the outcome of a fetch-by-identifier.
pub fn format_details(key: &str, outcome: &Result<Issue, TrackerError>) -> String {
    match outcome {
        Ok(issue) => format!(
            "Details for issue {}:\n\n{}",
            key,
            format_issue(issue, true)
        ),
        Err(TrackerError::NotFound(_)) => not_found(key),
        Err(e) => format!("{} ({})", not_found(key), e),
    }
}

fn not_found(key: &str) -> String {
    format!("Issue {} not found.", key)
}

/// Available commands and example natural-language queries.
pub fn help_text() -> String {
    [
        "Available commands:",
        "1. Basic commands:",
        "   - my issues: Show all issues assigned to you",
        "   - details [ISSUE-KEY]: Show detailed information about a specific issue",
        "   - help: Show this help message",
        "   - exit: Exit the chatbot",
        "",
        "2. Natural language queries (examples):",
        "   - show me my high priority tasks",
        "   - what issues are in To Do status",
        "   - show my latest created issues",
        "   - find issues created today",
        "",
        "Tip: You can ask about your issues in plain English!",
    ]
    .join("\n")
}

// =============================================================================
// Tests
// =============================================================================
