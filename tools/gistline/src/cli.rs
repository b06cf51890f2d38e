//! Command-line surface.
//!
//! Positional arguments are collected loosely here; argument counts are
//! checked by [`Command::validate`] so that a short argument list produces a
//! usage warning instead of a parse failure.

use clap::{Parser, Subcommand};

/// Creates GitHub gists and renders repository timelines.
#[derive(Parser, Debug)]
#[command(name = "gistline")]
#[command(version, about = "Creates GitHub gists and renders repository timelines")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the names of a user's repositories.
    #[command(visible_alias = "f")]
    Fetch {
        /// GitHub username; anything after it is ignored.
        #[arg(value_name = "USERNAME")]
        args: Vec<String>,
    },

    /// Create a gist from one or more files.
    #[command(visible_alias = "c")]
    Create {
        /// Gist description.
        description: Option<String>,

        /// Files to upload, named in the gist exactly as given.
        files: Vec<String>,
    },

    /// Create a gist from every file below a directory.
    #[command(name = "create-from-dir", visible_alias = "dir")]
    CreateFromDir {
        /// Gist description followed by the directory.
        args: Vec<String>,
    },

    /// Render timeline.html from a user's repositories.
    #[command(name = "create-timeline", visible_alias = "timeline")]
    CreateTimeline {
        /// GitHub username; anything after it is ignored.
        #[arg(value_name = "USERNAME")]
        args: Vec<String>,
    },
}

/// A command whose arguments passed the count checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated {
    Fetch { username: String },
    Create { description: String, files: Vec<String> },
    CreateFromDir { description: String, directory: String },
    CreateTimeline { username: String },
}

impl Command {
    /// Checks argument counts, returning the usage line on failure.
    pub fn validate(self) -> Result<Validated, &'static str> {
        match self {
            Self::Fetch { args } => first(args)
                .map(|username| Validated::Fetch { username })
                .ok_or("gistline fetch <username>"),

            Self::Create {
                description: Some(description),
                files,
            } if !files.is_empty() => Ok(Validated::Create { description, files }),
            Self::Create { .. } => Err("gistline create <description> <file>..."),

            Self::CreateFromDir { args } => match <[String; 2]>::try_from(args) {
                Ok([description, directory]) => Ok(Validated::CreateFromDir {
                    description,
                    directory,
                }),
                Err(_) => Err("gistline create-from-dir <description> <directory>"),
            },

            Self::CreateTimeline { args } => first(args)
                .map(|username| Validated::CreateTimeline { username })
                .ok_or("gistline create-timeline <username>"),
        }
    }
}

fn first(args: Vec<String>) -> Option<String> {
    if args.len() > 1 {
        tracing::debug!(ignored = ?&args[1..], "ignoring extra arguments");
    }
    args.into_iter().next()
}
