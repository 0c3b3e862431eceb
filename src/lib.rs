//! `repo_bootstrap` - organization repository provisioning via Octocrab
//!
//! This library provisions a GitHub repository under the organization and
//! attaches the standard team roster to it. Each GitHub operation lives in
//! its own module under `github`, fronted by a thin client wrapper.

// Module declarations
pub mod config;
pub mod github;
pub mod provision;
pub mod runtime;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export configuration types
pub use config::{Config, ConfigError, ENV_REPO, ENV_TOKEN, ORG};

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export team roster types
pub use github::{Team, TeamPermission, roster};

// Re-export provisioning entry points
pub use provision::{apply_team_permissions, create_repository_if_absent, provision};
