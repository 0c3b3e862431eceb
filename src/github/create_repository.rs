//! GitHub Repository creation operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::{Octocrab, models::Repository};
use std::sync::Arc;

/// Create a repository under an organization with the standard settings.
///
/// New repositories are private, have issues enabled, have projects disabled,
/// and are initialized with an empty commit so branches can be created
/// immediately.
pub(crate) fn create_org_repository(
    inner: Arc<Octocrab>,
    org: impl Into<String>,
    name: impl Into<String>,
) -> AsyncTask<Result<Repository, GitHubError>> {
    let (org, name) = (org.into(), name.into());
    spawn_task(async move {
        let body = serde_json::json!({
            "name": name,
            "private": true,
            "has_issues": true,
            "has_projects": false,
            "auto_init": true,
        });

        let route = format!("/orgs/{org}/repos");
        inner
            .post(route, Some(&body))
            .await
            .map_err(GitHubError::from)
    })
}
