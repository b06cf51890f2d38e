//! Error types for gistline.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type returned by the library.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or unreadable configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configured API base URL is unusable
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    /// Transport failure talking to the API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("GitHub API returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    /// The API answered with a body we could not decode
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem error on a specific path
    #[error("{path}: {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Timeline template is malformed
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A gist must carry at least one file
    #[error("refusing to create a gist with no files")]
    EmptyGist,
}

impl Error {
    /// Wraps an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while resolving the credential configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `.env` file could not be found or parsed
    #[error("failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),

    /// A required variable is unset or blank
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    /// A variable holds characters that cannot go into an HTTP header
    #[error("environment variable {0} is not a valid header value")]
    InvalidVar(&'static str),
}

/// Errors raised while parsing the timeline template.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template is missing the {0} marker")]
    MissingMarker(&'static str),

    #[error("template contains more than one {0} marker")]
    DuplicateMarker(&'static str),

    #[error("template closes the repo block before opening it")]
    MisorderedMarkers,
}
