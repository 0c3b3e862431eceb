//! GitHub API client wrapper
//!
//! Provides clean API for GitHub operations without exposing Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use repo_bootstrap::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!
//!     let repo = gh.create_org_repository("someorg", "new-service").await??;
//!     println!("created {}", repo.name);
//!
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::teams::TeamPermission;
use octocrab::Octocrab;
use std::sync::Arc;

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Provides clean API without exposing Octocrab dependency.
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Get inner Octocrab client
    #[must_use]
    pub fn inner(&self) -> &Arc<Octocrab> {
        &self.inner
    }

    /// Create a repository under an organization
    pub fn create_org_repository(
        &self,
        org: impl Into<String>,
        name: impl Into<String>,
    ) -> crate::runtime::AsyncTask<Result<octocrab::models::Repository, GitHubError>> {
        crate::github::create_repository::create_org_repository(self.inner.clone(), org, name)
    }

    /// Grant a team a permission level on a repository
    pub fn add_team_repository(
        &self,
        team_id: u64,
        org: impl Into<String>,
        repo: impl Into<String>,
        permission: TeamPermission,
    ) -> crate::runtime::AsyncTask<Result<(), GitHubError>> {
        crate::github::add_team_repository::add_team_repository(
            self.inner.clone(),
            team_id,
            org,
            repo,
            permission,
        )
    }
}

/// Builder for creating `GitHubClient`
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let mut builder = Octocrab::builder();

        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }

        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(&uri)
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
