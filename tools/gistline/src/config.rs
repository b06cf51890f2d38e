//! Credential and endpoint configuration.
//!
//! Values come from the process environment after a local `.env` file has
//! been loaded into it. Loading happens once, at startup, and the result is
//! handed to [`GithubClient::new`](crate::client::GithubClient::new).

use std::fmt;
use std::path::Path;

use crate::error::ConfigError;

/// Variable holding the personal access token.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Variable that overrides the API base URL.
pub const API_URL_VAR: &str = "GITHUB_API_URL";

/// Name of the environment file read from the working directory.
pub const ENV_FILE: &str = ".env";

/// Public GitHub REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Resolved configuration.
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub api_url: String,
}

impl Config {
    /// Loads `.env` from the working directory, then resolves from the
    /// process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Loads `dir/.env` into the process environment, then resolves from it.
    ///
    /// Only `dir` itself is consulted; parent directories are not searched.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(ENV_FILE);
        dotenvy::from_path(&path)?;
        tracing::debug!(path = %path.display(), "loaded environment file");

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingVar(TOKEN_VAR))?;

        let api_url = lookup(API_URL_VAR)
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self { token, api_url })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}
