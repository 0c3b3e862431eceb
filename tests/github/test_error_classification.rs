//! Tests for already-exists error normalization.

use repo_bootstrap::GitHubError;

#[test]
fn test_duplicate_name_is_normalized() {
    let err = GitHubError::Api(
        "Validation Failed: name already exists on this account".to_string(),
    );
    assert!(err.is_already_exists());
}

#[test]
fn test_classification_is_case_insensitive() {
    let err = GitHubError::Api("Name Already Exists on this account".to_string());
    assert!(err.is_already_exists());
}

#[test]
fn test_other_api_errors_surface() {
    for message in ["Bad credentials", "Not Found", "Validation Failed: name is too short"] {
        let err = GitHubError::Api(message.to_string());
        assert!(!err.is_already_exists(), "{message} should surface");
    }
}

#[test]
fn test_setup_errors_surface() {
    let err = GitHubError::ClientSetup("invalid base uri".to_string());
    assert!(!err.is_already_exists());
}

#[test]
fn test_error_display() {
    let err = GitHubError::Api("boom".to_string());
    assert_eq!(err.to_string(), "GitHub API error: boom");

    let err = GitHubError::ClientSetup("bad key".to_string());
    assert_eq!(err.to_string(), "Client setup failed: bad key");
}
