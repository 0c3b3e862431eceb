//! GitHub API operations module
//!
//! Provides GitHub API operations using the octocrab library.

pub mod client;
pub mod error;
pub mod teams;
pub mod util;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

// Re-export team types
pub use teams::{Team, TeamPermission, roster};

// GitHub API operations - Repositories (internal)
pub(crate) mod add_team_repository;
pub(crate) mod create_repository;
