//! Tool catalog: the five repository tools over one immutable snapshot.

mod glob;
mod grep;
mod ls;
pub mod protocol;
mod read;
mod search;
pub(crate) mod utils;

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::debug;

use crate::config::ToolConfig;
use crate::error::ToolError;
use crate::semantic::ChunkQuery;
use crate::RepoFile;

use self::protocol::{ParamSpec, ParamType, ToolCallResult, ToolDefinition};

/// The closed set of tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Ls,
    Glob,
    Grep,
    Read,
    Search,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Ls,
        ToolKind::Glob,
        ToolKind::Grep,
        ToolKind::Read,
        ToolKind::Search,
    ];

    /// Wire name, e.g. `repository_grep`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ToolKind::Ls => "repository_ls",
            ToolKind::Glob => "repository_glob",
            ToolKind::Grep => "repository_grep",
            ToolKind::Read => "repository_read",
            ToolKind::Search => "repository_search",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            ToolKind::Ls => "List every file in the repository snapshot, sorted by name, with line and character counts. Start here to see what is available.",
            ToolKind::Glob => "Find files whose path matches a glob pattern (case-insensitive). Supports *, ** (any depth), ?, [abc], [!abc] and {a,b}. Example: '**/*.md'.",
            ToolKind::Grep => "Search file contents line by line with a regex (invalid regex is matched literally). Returns matching lines (':') with surrounding context lines ('-'). Results are capped per file and at 100 matches overall; narrow with filePattern when the limit is reached.",
            ToolKind::Read => "Read a line range of one file with line numbers. Reads 200 lines by default; use startLine/endLine to page through longer files. Long output is truncated by characters.",
            ToolKind::Search => "Semantic search across the repository: returns the passages most related in meaning to a natural-language query, with similarity scores. Use for concepts; use repository_grep for exact text.",
        }
    }

    /// Parameters in declaration order.
    #[must_use]
    pub fn parameters(self) -> Vec<ParamSpec> {
        match self {
            ToolKind::Ls => vec![],
            ToolKind::Glob => vec![ParamSpec::required(
                "pattern",
                ParamType::String,
                "Glob pattern matched against full file paths, e.g. 'src/**/*.rs' or '*.{ts,tsx}'",
            )],
            ToolKind::Grep => vec![
                ParamSpec::required("pattern", ParamType::String, "Regular expression (or literal text) to search for"),
                ParamSpec::optional("filePattern", ParamType::String, "Only search files whose path matches this glob"),
                ParamSpec::optional("ignoreCase", ParamType::Boolean, "Case-insensitive matching (default: true)"),
                ParamSpec::optional("contextLines", ParamType::Integer, "Lines of context before and after each match (default: 2)"),
                ParamSpec::optional("literal", ParamType::Boolean, "Treat pattern as plain text instead of a regex (default: false)"),
            ],
            ToolKind::Read => vec![
                ParamSpec::required("fileName", ParamType::String, "File name as listed by repository_ls (case-insensitive)"),
                ParamSpec::optional("startLine", ParamType::Integer, "First line to read, 1-based (default: 1)"),
                ParamSpec::optional("endLine", ParamType::Integer, "Last line to read, inclusive (default: startLine + 199)"),
            ],
            ToolKind::Search => vec![
                ParamSpec::required("query", ParamType::String, "Natural-language description of what to find"),
                ParamSpec::optional("limit", ParamType::Integer, "Maximum number of results (default: 10, max: 20)"),
            ],
        }
    }

    #[must_use]
    pub fn definition(self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.parameters())
    }
}

/// Tools bound to one file snapshot and one semantic backend.
///
/// The snapshot is immutable for the catalog's lifetime; build a new
/// catalog when files change. Cloning is cheap and clones share the
/// snapshot, so calls may run concurrently from any number of tasks.
#[derive(Clone)]
pub struct ToolCatalog {
    pub(crate) files: Arc<[RepoFile]>,
    pub(crate) backend: Arc<dyn ChunkQuery>,
    pub(crate) config: ToolConfig,
}

impl ToolCatalog {
    pub fn new(files: Vec<RepoFile>, backend: impl ChunkQuery + 'static, config: ToolConfig) -> Self {
        Self::from_shared(files.into(), Arc::new(backend), config)
    }

    /// Build from an already shared snapshot and backend.
    pub fn from_shared(files: Arc<[RepoFile]>, backend: Arc<dyn ChunkQuery>, config: ToolConfig) -> Self {
        debug!(files = files.len(), "Tool catalog created");
        Self { files, backend, config }
    }

    #[must_use]
    pub fn files(&self) -> &[RepoFile] {
        &self.files
    }

    #[must_use]
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Definitions of all five tools, in a fixed order.
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        ToolKind::ALL.into_iter().map(ToolKind::definition).collect()
    }

    /// Run one tool. Never panics or returns `Err`: failures become an
    /// error payload inside the result.
    pub async fn call(&self, kind: ToolKind, args: &Value) -> ToolCallResult {
        let start = Instant::now();
        let result = match kind {
            ToolKind::Ls => ls::handle_ls(self),
            ToolKind::Glob => glob::handle_glob(self, args),
            ToolKind::Grep => grep::handle_grep(self, args),
            ToolKind::Read => read::handle_read(self, args),
            ToolKind::Search => search::handle_search(self, args).await,
        };
        debug!(
            tool = kind.name(),
            elapsed_ms = format_args!("{:.2}", start.elapsed().as_secs_f64() * 1000.0),
            is_error = result.is_err(),
            "Tool call finished"
        );
        result.into()
    }

    /// Run a tool by wire name; unknown names produce an error payload.
    pub async fn call_by_name(&self, name: &str, args: &Value) -> ToolCallResult {
        match ToolKind::from_name(name) {
            Some(kind) => self.call(kind, args).await,
            None => ToolCallResult::from_error(&ToolError::UnknownTool(name.to_string())),
        }
    }
}

impl std::fmt::Debug for ToolCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolCatalog")
            .field("files", &self.files.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tools_test_utils;

#[cfg(test)]
#[path = "tools_tests.rs"]
mod tests;
