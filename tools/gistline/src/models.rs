//! JSON shapes exchanged with the GitHub API.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub login: String,
}

/// One entry of `GET /users/{user}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub forks: u32,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Content of a single gist file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GistFile {
    pub content: String,
}

/// Logical file name to content.
pub type GistFiles = BTreeMap<String, GistFile>;

/// Body of `POST /gists`.
#[derive(Debug, Clone, Serialize)]
pub struct GistRequest {
    pub description: String,
    pub files: GistFiles,
    pub public: bool,
}

impl GistRequest {
    /// Builds a public gist request.
    pub fn new(description: impl Into<String>, files: GistFiles) -> Self {
        Self {
            description: description.into(),
            files,
            public: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Fields we read back from a created gist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GistResponse {
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
}
