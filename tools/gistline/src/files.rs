//! Collects local files into gist entries.
//!
//! Both collectors tolerate per-file failures: an unreadable file is logged
//! and left out of the result, and the remaining files are still collected.

use std::fs;
use std::path::{Component, Path};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use walkdir::WalkDir;

use crate::models::{GistFile, GistFiles};

/// Reads each path into a gist entry keyed by the path exactly as given.
pub fn collect_files<I, S>(paths: I) -> GistFiles
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut files = GistFiles::new();

    for path in paths {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(bytes) => insert(&mut files, path.to_string(), bytes),
            Err(e) => tracing::warn!(path, error = %e, "skipping unreadable file"),
        }
    }

    files
}

/// Walks `root` recursively and reads every regular file below it.
/// Symbolic links are followed, so a linked file is read like any other.
///
/// Entries are keyed by their first path component under `root`, so
/// `root/a.txt` becomes `a.txt` and `root/sub/b.txt` becomes `sub`. Files
/// that map to the same key overwrite each other in walk order.
pub fn collect_dir(root: impl AsRef<Path>) -> GistFiles {
    let root = root.as_ref();
    let mut files = GistFiles::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = gist_name(root, entry.path()) else {
            continue;
        };

        match fs::read(entry.path()) {
            Ok(bytes) => {
                tracing::info!(file = %name, "adding file to gist");
                insert(&mut files, name, bytes);
            }
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "skipping unreadable file");
            }
        }
    }

    files
}

/// Text content for a gist file; non-UTF-8 data is base64 encoded.
pub fn file_content(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => STANDARD.encode(e.into_bytes()),
    }
}

fn gist_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    match relative.components().next()? {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }
}

fn insert(files: &mut GistFiles, name: String, bytes: Vec<u8>) {
    let content = file_content(bytes);
    if files.insert(name.clone(), GistFile { content }).is_some() {
        tracing::warn!(file = %name, "duplicate gist file name, keeping the later file");
    }
}
