//! gistline - GitHub gist and timeline CLI
//!
//! Reads `GITHUB_TOKEN` from a `.env` file in the working directory and runs
//! one subcommand against the GitHub REST API.
//!
//! # Usage
//!
//! ```bash
//! # Print a user's repository names
//! gistline fetch octocat
//!
//! # Create a gist from files
//! gistline create "notes" notes.md todo.txt
//!
//! # Create a gist from a directory
//! gistline create-from-dir "snippets" ./snippets
//!
//! # Write timeline.html for a user
//! gistline create-timeline octocat
//! ```

use std::process::ExitCode;

use clap::Parser;
use gistline::cli::Args;
use gistline::{App, Config, GithubClient};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match GithubClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("failed to build GitHub client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let app = App::new(client);
    let mut stdout = std::io::stdout().lock();

    match app.run(args.command, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
