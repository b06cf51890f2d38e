//! Static HTML timeline of a user's repositories.
//!
//! The page layout lives in `templates/timeline.html` and is compiled into
//! the binary. The template contract is small:
//!
//! - exactly one block between `<!-- repo -->` and `<!-- /repo -->`, emitted
//!   once per repository with `{{name}}`, `{{url}}`, `{{description}}` and
//!   `{{created}}` filled in
//! - `{{count}}` anywhere outside the block, replaced with the number of
//!   repositories
//!
//! Unknown placeholders are left untouched. All values are HTML-escaped.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{Error, TemplateError};
use crate::models::Repository;

/// Default output file, relative to the working directory.
pub const TIMELINE_FILE: &str = "timeline.html";

/// Date pattern used for `{{created}}`, e.g. `02 January 2006`.
pub const DATE_FORMAT: &str = "%d %B %Y";

const TIMELINE_TEMPLATE: &str = include_str!("../templates/timeline.html");
const BLOCK_OPEN: &str = "<!-- repo -->";
const BLOCK_CLOSE: &str = "<!-- /repo -->";

/// A parsed page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    head: &'a str,
    block: &'a str,
    tail: &'a str,
}

impl<'a> Template<'a> {
    pub fn parse(source: &'a str) -> Result<Self, TemplateError> {
        for marker in [BLOCK_OPEN, BLOCK_CLOSE] {
            match source.matches(marker).count() {
                0 => return Err(TemplateError::MissingMarker(marker)),
                1 => {}
                _ => return Err(TemplateError::DuplicateMarker(marker)),
            }
        }

        let (head, rest) = source
            .split_once(BLOCK_OPEN)
            .ok_or(TemplateError::MissingMarker(BLOCK_OPEN))?;
        let (block, tail) = rest
            .split_once(BLOCK_CLOSE)
            .ok_or(TemplateError::MisorderedMarkers)?;

        Ok(Self { head, block, tail })
    }

    /// Renders `repos` in the order given.
    pub fn render(&self, repos: &[Repository]) -> String {
        let count = repos.len().to_string();
        let page = |key: &str| (key == "count").then(|| count.clone());

        let mut out = substitute(self.head, page);
        for repo in repos {
            out.push_str(&substitute(self.block, |key| repo_field(repo, key)));
        }
        out.push_str(&substitute(self.tail, page));
        out
    }
}

/// Renders the built-in timeline template.
pub fn render_timeline(repos: &[Repository]) -> Result<String, Error> {
    let template = Template::parse(TIMELINE_TEMPLATE)?;
    Ok(template.render(repos))
}

/// Orders repositories oldest first. Ties keep their original order.
pub fn sort_by_created(repos: &mut [Repository]) {
    repos.sort_by_key(|r| r.created_at);
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Writes the page, creating parent directories and replacing any
/// existing file.
pub fn write_output(path: &Path, html: &str) -> Result<(), Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, html).map_err(|e| Error::io(path, e))
}

fn repo_field(repo: &Repository, key: &str) -> Option<String> {
    let value = match key {
        "name" => html_escape::encode_text(&repo.name).into_owned(),
        "url" => html_escape::encode_double_quoted_attribute(&repo.html_url).into_owned(),
        "description" => {
            html_escape::encode_text(repo.description.as_deref().unwrap_or_default()).into_owned()
        }
        "created" => format_date(&repo.created_at),
        _ => return None,
    };
    Some(value)
}

/// Replaces each `{{key}}` for which `lookup` returns a value.
fn substitute<F>(fragment: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(fragment.len());
    let mut rest = fragment;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = after[..end].trim();
        match lookup(key) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}
