//! # repo_tools — file exploration tools for LLM agents
//!
//! Five side-effect-free tools (`repository_ls`, `repository_glob`,
//! `repository_grep`, `repository_read`, `repository_search`) over an
//! immutable in-memory snapshot of a document/code set. Every tool returns a
//! single, size-bounded text block, so an agent can explore a corpus
//! without loading it into its prompt.
//!
//! ## Library usage
//!
//! ```
//! use repo_tools::{RepoFile, ToolCatalog, ToolConfig, UnconfiguredBackend};
//!
//! let files = vec![
//!     RepoFile::completed("b.ts", "foo\nbar"),
//!     RepoFile::completed("a.ts", "baz"),
//! ];
//! let catalog = ToolCatalog::new(files, UnconfiguredBackend, ToolConfig::default());
//! assert_eq!(catalog.definitions().len(), 5);
//! ```

use serde::{Deserialize, Serialize};

pub mod config;
pub mod error;
pub mod glob;
pub mod grep;
pub mod lines;
pub mod semantic;
pub mod tools;

pub use config::ToolConfig;
pub use error::ToolError;
pub use glob::{match_glob, GlobMatcher};
pub use grep::{grep, GrepOptions, GrepOutcome, LineMatch, MatchSpan};
pub use semantic::{query_fn, ChunkQuery, QueryError, UnconfiguredBackend};
pub use tools::protocol::{ContentBlock, ParamSpec, ParamType, ToolCallResult, ToolDefinition};
pub use tools::{ToolCatalog, ToolKind};

// ─── Snapshot types ──────────────────────────────────────────────────

/// Processing state of a file in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

/// One file of the snapshot.
///
/// Only `Completed` files with non-empty text are searched and read;
/// every file is listed by `ls` and `glob`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoFile {
    pub name: String,
    pub status: FileStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl RepoFile {
    pub fn new(name: impl Into<String>, status: FileStatus, text: Option<String>) -> Self {
        Self { name: name.into(), status, text }
    }

    /// Convenience constructor for a fully processed file.
    pub fn completed(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, FileStatus::Completed, Some(text.into()))
    }

    /// Text, or `""` when absent.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Completed with non-empty text: eligible for grep and read content.
    #[must_use]
    pub fn is_searchable(&self) -> bool {
        self.status == FileStatus::Completed && !self.text().is_empty()
    }
}

/// A retrieved fragment produced by the external semantic search backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub file: RepoFile,
    pub text: String,
    /// In `[0, 1]` when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f32>,
}

// ─── Path helpers ────────────────────────────────────────────────────

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_path_sep(p: &str) -> String {
    p.replace('\\', "/")
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn test_normalize_path_sep() {
        assert_eq!(normalize_path_sep(r"C:\foo\bar"), "C:/foo/bar");
    }

    #[test]
    fn test_searchable_requires_completed_and_text() {
        assert!(RepoFile::completed("a", "x").is_searchable());
        assert!(!RepoFile::completed("a", "").is_searchable());
        assert!(!RepoFile::new("a", FileStatus::Pending, Some("x".into())).is_searchable());
        assert!(!RepoFile::new("a", FileStatus::Completed, None).is_searchable());
    }

    #[test]
    fn test_file_status_serde() {
        let file: RepoFile =
            serde_json::from_str(r#"{"name":"a.md","status":"completed","text":"hi"}"#).unwrap();
        assert_eq!(file.status, FileStatus::Completed);
        let pending: RepoFile = serde_json::from_str(r#"{"name":"b.md","status":"pending"}"#).unwrap();
        assert_eq!(pending.text, None);
    }
}
