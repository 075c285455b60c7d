//! Error types for issue-tracker access.

/// Errors from the issue tracker.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("issue not found: {0}")]
    NotFound(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("tracker returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed tracker response: {0}")]
    Parse(String),
}

impl TrackerError {
    /// Whether the tracker answered and reported the issue as missing, as
    /// opposed to the request itself failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackerError::NotFound(_))
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TrackerError::Parse(err.to_string())
        } else {
            TrackerError::Transport(err.to_string())
        }
    }
}
