//! gistline: create GitHub gists from local files and render a static HTML
//! timeline of a user's repositories.
//!
//! The binary wires these pieces together; the library is split so each
//! step can be exercised on its own:
//!
//! - [`config`] resolves the access token
//! - [`client`] talks to the GitHub REST API
//! - [`files`] turns local files into gist entries
//! - [`timeline`] renders repositories into HTML
//! - [`commands`] runs a parsed [`cli::Command`]

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod files;
pub mod models;
pub mod timeline;

pub use client::GithubClient;
pub use commands::App;
pub use config::Config;
pub use error::{ConfigError, Error, TemplateError};
pub use models::{GistFile, GistFiles, GistRequest, GistResponse, Repository};
