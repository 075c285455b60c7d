//! Command recognition.
//!
//! Maps a line of user input onto a closed set of commands. Anything that
//! is not a recognized literal command is a natural-language query.

use std::sync::LazyLock;

use regex::Regex;

static DETAILS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^details\s+(.+)$").expect("Invalid details regex"));

const LIST_COMMANDS: &[&str] = &["my issues", "show my issues", "list issues"];
const HELP_COMMANDS: &[&str] = &["help", "?"];
const EXIT_COMMANDS: &[&str] = &["exit", "quit", "bye"];

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fixed listing of the current user's issues.
    ListIssues,
    /// Detail view for one issue; the identifier is uppercased.
    Details(String),
    Help,
    Exit,
    /// Blank input.
    Empty,
    /// Free text to translate into a query, trimmed but otherwise as typed.
    ///
    /// Casing is kept because quoted values inside the request (status names,
    /// project keys, summaries) are case-sensitive once they reach the query.
    NaturalLanguage(String),
}

impl Command {
    /// Parse one line of input. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Command::Empty;
        }

        let normalized = trimmed.to_lowercase();
        let normalized = normalized.as_str();

        if LIST_COMMANDS.contains(&normalized) {
            return Command::ListIssues;
        }
        if HELP_COMMANDS.contains(&normalized) {
            return Command::Help;
        }
        if EXIT_COMMANDS.contains(&normalized) {
            return Command::Exit;
        }
        if let Some(caps) = DETAILS_RE.captures(trimmed) {
            let key = caps[1].trim().to_uppercase();
            return Command::Details(key);
        }

        Command::NaturalLanguage(trimmed.to_string())
    }
}
