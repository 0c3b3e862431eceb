//! Tests for library root module.

use repo_bootstrap::{ConfigError, GitHubError, TeamPermission};

#[test]
fn test_error_types() {
    // Test that error types can be constructed
    let _error: GitHubError = GitHubError::Api("boom".to_string());
    let _error: ConfigError = ConfigError::MissingVar("GH_KEY");
}

#[test]
fn test_team_permission() {
    assert_eq!(TeamPermission::Admin.as_str(), "admin");
    assert_eq!(TeamPermission::Push.as_str(), "push");
    assert_eq!(TeamPermission::Pull.as_str(), "pull");
}

#[test]
fn test_runtime_types_exported() {
    // Verify runtime types are exported from library root
    use repo_bootstrap::AsyncTask;

    let _task_type: Option<AsyncTask<i32>> = None;
}

#[test]
fn test_env_var_names() {
    assert_eq!(repo_bootstrap::ENV_TOKEN, "GH_KEY");
    assert_eq!(repo_bootstrap::ENV_REPO, "REPO");
    assert_eq!(repo_bootstrap::ORG, "someorg");
}
