//! GitHub API error types

use thiserror::Error;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error
    #[error("Octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Generic GitHub API error
    #[error("GitHub API error: {0}")]
    Api(String),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// Whether this error says the repository name is already taken.
    ///
    /// GitHub reports a duplicate name as HTTP 422 with a `custom` validation
    /// error whose message contains "already exists". The create-if-absent
    /// path treats exactly that shape as a no-op.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        match self {
            GitHubError::Octocrab(octocrab::Error::GitHub { source, .. }) => {
                classify_already_exists(
                    source.status_code.as_u16(),
                    &source.message,
                    source.errors.as_deref().unwrap_or_default(),
                )
            }
            GitHubError::Api(message) => message_indicates_existing(message),
            _ => false,
        }
    }
}

/// Classify a GitHub API error response as a duplicate-name rejection.
///
/// Only a 422 validation failure qualifies; the message match alone is not
/// enough, since any response body could mention "already exists".
pub(crate) fn classify_already_exists(
    status: u16,
    message: &str,
    errors: &[serde_json::Value],
) -> bool {
    if status != 422 {
        return false;
    }
    if message_indicates_existing(message) {
        return true;
    }
    errors.iter().any(|err| {
        err.get("message")
            .and_then(|m| m.as_str())
            .is_some_and(message_indicates_existing)
    })
}

/// Case-insensitive check for GitHub's duplicate-name validation message.
pub(crate) fn message_indicates_existing(message: &str) -> bool {
    message.to_ascii_lowercase().contains("already exists")
}

// Convenience conversions
impl From<String> for GitHubError {
    fn from(s: String) -> Self {
        GitHubError::Api(s)
    }
}

impl From<&str> for GitHubError {
    fn from(s: &str) -> Self {
        GitHubError::Api(s.to_string())
    }
}
