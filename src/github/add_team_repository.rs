//! GitHub team repository permission operation.

use crate::github::teams::TeamPermission;
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Grant a team a permission level on a repository.
///
/// Uses the id-addressed route so teams can be granted access without
/// resolving their slug first. GitHub answers 204 No Content on success;
/// the call is idempotent and re-granting updates the permission in place.
pub(crate) fn add_team_repository(
    inner: Arc<Octocrab>,
    team_id: u64,
    org: impl Into<String>,
    repo: impl Into<String>,
    permission: TeamPermission,
) -> AsyncTask<Result<(), GitHubError>> {
    let (org, repo) = (org.into(), repo.into());
    spawn_task(async move {
        let body = serde_json::json!({
            "permission": permission.as_str(),
        });

        let route = format!("/teams/{team_id}/repos/{org}/{repo}");
        inner
            .put::<serde_json::Value, _, _>(route, Some(&body))
            .await
            .map_err(GitHubError::from)?;
        Ok(())
    })
}
