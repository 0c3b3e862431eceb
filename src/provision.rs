//! Repository provisioning flow.
//!
//! Two steps, run in order: create the repository if it does not exist yet,
//! then grant the standard team roster access to it. The create step is
//! idempotent so the tool can be re-run safely after a partial failure.

use crate::config::{Config, ORG};
use crate::github::teams::Team;
use crate::github::{GitHubClient, GitHubError, GitHubResult};
use futures::future::join_all;
use log::info;
use octocrab::models::Repository;

/// Create the repository under the organization unless it already exists.
///
/// Returns `Some(repository)` when a new repository was created and `None`
/// when the name was already taken (a successful no-op). Any other API error
/// propagates.
pub async fn create_repository_if_absent(
    client: &GitHubClient,
    org: &str,
    repo: &str,
) -> GitHubResult<Option<Repository>> {
    let task_result = client.create_org_repository(org, repo).await;
    let api_result = task_result.map_err(|e| GitHubError::Api(format!("task channel error: {e}")))?;

    match api_result {
        Ok(repository) => {
            info!("repo \"{org}/{repo}\" has been created");
            Ok(Some(repository))
        }
        Err(err) if err.is_already_exists() => {
            info!("repo \"{org}/{repo}\" already exists, leaving it untouched");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Grant every team in the roster its permission level on the repository.
///
/// The grants are independent, so they all fan out concurrently and every
/// one is attempted even when another fails. The returned error is the first
/// failure in roster order, annotated with the team name.
pub async fn apply_team_permissions(
    client: &GitHubClient,
    org: &str,
    repo: &str,
    teams: &[Team],
) -> GitHubResult<()> {
    let tasks = teams.iter().map(|team| {
        info!("adding {} ({})", team.name, team.permission.as_str());
        client.add_team_repository(team.id, org, repo, team.permission)
    });

    let results = join_all(tasks).await;

    for (team, task_result) in teams.iter().zip(results) {
        let api_result =
            task_result.map_err(|e| GitHubError::Api(format!("task channel error: {e}")))?;
        api_result.map_err(|e| {
            GitHubError::Api(format!("error adding team \"{}\": {e}", team.name))
        })?;
    }

    info!("successfully added all teams");
    Ok(())
}

/// Run the full provisioning sequence for the configured repository.
pub async fn provision(client: &GitHubClient, config: &Config) -> GitHubResult<()> {
    create_repository_if_absent(client, ORG, &config.repo).await?;
    apply_team_permissions(client, ORG, &config.repo, crate::github::teams::roster()).await?;
    Ok(())
}
