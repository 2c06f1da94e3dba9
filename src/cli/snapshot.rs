//! Building a repository snapshot from a directory walk or a JSON file.

use std::fs;
use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use repo_tools::{normalize_path_sep, FileStatus, RepoFile};

use super::args::SnapshotArgs;
use super::error::CliError;

/// Load the snapshot selected by `args`: `--snapshot` file, else `--dir` (default `.`).
pub fn load_snapshot(args: &SnapshotArgs) -> Result<Vec<RepoFile>, CliError> {
    if let Some(path) = &args.snapshot {
        return load_snapshot_file(Path::new(path));
    }
    let dir = args.dir.as_deref().unwrap_or(".");
    walk_dir(Path::new(dir), args.hidden, args.no_ignore, &args.extensions())
}

/// Parse a JSON array of `{name, status, text}` entries.
pub fn load_snapshot_file(path: &Path) -> Result<Vec<RepoFile>, CliError> {
    let raw = fs::read_to_string(path)?;
    let files: Vec<RepoFile> = serde_json::from_str(&raw)?;
    info!(path = %path.display(), files = files.len(), "Loaded snapshot file");
    Ok(files)
}

/// Walk `root` honoring .gitignore (unless `no_ignore`). Every file becomes a
/// `Completed` entry named relative to `root` with `/` separators; files that
/// cannot be read become `Error` entries without text.
pub fn walk_dir(root: &Path, hidden: bool, no_ignore: bool, extensions: &[String]) -> Result<Vec<RepoFile>, CliError> {
    if !root.is_dir() {
        return Err(CliError::InvalidArgs(format!("Directory does not exist: {}", root.display())));
    }

    let mut builder = WalkBuilder::new(root);
    builder.hidden(!hidden);
    builder.git_ignore(!no_ignore);
    builder.git_global(!no_ignore);
    builder.git_exclude(!no_ignore);
    builder.require_git(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    let mut lossy_count = 0usize;

    for entry in builder.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if !matches_extension(entry.path(), extensions) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let name = normalize_path_sep(&relative.to_string_lossy());

        match read_file_lossy(entry.path()) {
            Ok((text, was_lossy)) => {
                if was_lossy {
                    lossy_count += 1;
                }
                files.push(RepoFile::completed(name, text));
            }
            Err(e) => {
                debug!(file = %name, error = %e, "Failed to read file");
                files.push(RepoFile::new(name, FileStatus::Error, None));
            }
        }
    }

    info!(dir = %root.display(), files = files.len(), lossy = lossy_count, "Loaded snapshot from directory");
    Ok(files)
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
}

/// Read a file as a String, replacing invalid UTF-8 sequences.
/// Returns `(content, was_lossy)`.
fn read_file_lossy(path: &Path) -> std::io::Result<(String, bool)> {
    let raw = fs::read(path)?;
    match String::from_utf8(raw) {
        Ok(s) => Ok((s, false)),
        Err(e) => Ok((String::from_utf8_lossy(e.as_bytes()).into_owned(), true)),
    }
}
