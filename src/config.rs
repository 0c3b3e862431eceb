//! Environment-driven configuration.
//!
//! The tool is driven entirely by two environment variables so it can run
//! unattended from CI. Validation happens up front: nothing talks to GitHub
//! until both values are present.

use thiserror::Error;

/// Name of the variable holding the authentication token.
pub const ENV_TOKEN: &str = "GH_KEY";

/// Name of the variable holding the target repository name.
pub const ENV_REPO: &str = "REPO";

/// The organization every repository is provisioned under.
pub const ORG: &str = "someorg";

/// Configuration error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is missing or empty
    #[error("environment variable \"{0}\" is required")]
    MissingVar(&'static str),
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub personal access token
    pub token: String,
    /// Name of the repository to provision
    pub repo: String,
}

impl Config {
    /// Read and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an injected lookup.
    ///
    /// An empty value counts as missing, matching how an unset and a blank
    /// variable are indistinguishable to the operator.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        Ok(Config {
            token: require(ENV_TOKEN)?,
            repo: require(ENV_REPO)?,
        })
    }
}
