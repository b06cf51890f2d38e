//! Subcommand execution.
//!
//! [`App::run`] decides which failures are tolerated. Usage errors and a
//! failed repository listing are logged and the command finishes normally;
//! gist creation, template and output failures are returned to the caller.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::{Command, Validated};
use crate::client::GithubClient;
use crate::error::Error;
use crate::files::{collect_dir, collect_files};
use crate::models::{GistFiles, GistRequest, GistResponse, Repository};
use crate::timeline::{TIMELINE_FILE, render_timeline, sort_by_created, write_output};

/// Everything a command needs to run.
#[derive(Debug, Clone)]
pub struct App {
    client: GithubClient,
    timeline_path: PathBuf,
}

impl App {
    pub fn new(client: GithubClient) -> Self {
        Self {
            client,
            timeline_path: PathBuf::from(TIMELINE_FILE),
        }
    }

    /// Overrides where `create-timeline` writes its page.
    pub fn with_timeline_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.timeline_path = path.into();
        self
    }

    pub async fn run<W: Write>(&self, command: Command, out: &mut W) -> Result<(), Error> {
        let command = match command.validate() {
            Ok(command) => command,
            Err(usage) => {
                tracing::warn!("insufficient arguments, usage: {usage} (see --help)");
                return Ok(());
            }
        };

        match command {
            Validated::Fetch { username } => self.fetch(&username, out).await,
            Validated::Create { description, files } => {
                let files = collect_files(&files);
                let response = self.create_gist(description, files).await?;
                print_gist(&response, out)
            }
            Validated::CreateFromDir {
                description,
                directory,
            } => {
                let files = collect_dir(&directory);
                let response = self.create_gist(description, files).await?;
                print_gist(&response, out)
            }
            Validated::CreateTimeline { username } => self.create_timeline(&username).await,
        }
    }

    async fn fetch<W: Write>(&self, username: &str, out: &mut W) -> Result<(), Error> {
        for repo in self.repos(username).await {
            writeln!(out, "{}", repo.name).map_err(|e| Error::io("<stdout>", e))?;
        }
        Ok(())
    }

    async fn create_gist(
        &self,
        description: String,
        files: GistFiles,
    ) -> Result<GistResponse, Error> {
        let gist = GistRequest::new(description, files);
        if gist.is_empty() {
            return Err(Error::EmptyGist);
        }

        let response = self.client.create_gist(&gist).await?;
        tracing::info!(files = gist.files.len(), "created gist");
        Ok(response)
    }

    async fn create_timeline(&self, username: &str) -> Result<(), Error> {
        tracing::info!(path = %self.timeline_path.display(), "generating timeline");

        let mut repos = self.repos(username).await;
        sort_by_created(&mut repos);

        let html = render_timeline(&repos)?;
        write_output(&self.timeline_path, &html)?;

        tracing::info!(
            path = %self.timeline_path.display(),
            repositories = repos.len(),
            "generated timeline"
        );
        Ok(())
    }

    /// Lists repositories, degrading to an empty list when the API fails.
    async fn repos(&self, username: &str) -> Vec<Repository> {
        match self.client.list_repos(username).await {
            Ok(repos) => repos,
            Err(e) => {
                tracing::error!(username, error = %e, "failed to list repositories");
                Vec::new()
            }
        }
    }
}

fn print_gist<W: Write>(response: &GistResponse, out: &mut W) -> Result<(), Error> {
    let description = response.description.as_deref().unwrap_or_default();
    writeln!(out, "URL  {}", response.html_url)
        .and_then(|()| writeln!(out, "Description  {description}"))
        .map_err(|e| Error::io("<stdout>", e))
}
