// Repository bootstrap CLI.
//
// Creates the configured repository under the organization if it does not
// exist yet and grants the standard team roster access to it. Driven by the
// GH_KEY and REPO environment variables; exits non-zero on the first failure.

use anyhow::{Context, Result};
use log::info;
use repo_bootstrap::{Config, GitHubClient, provision};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("invalid configuration")?;

    let client = GitHubClient::with_token(&config.token)
        .context("failed to create GitHub client")?;

    provision(&client, &config)
        .await
        .context("provisioning failed")?;

    info!("job tasks completed");
    Ok(())
}
