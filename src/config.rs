//! Tunable output budgets for the tool catalog.

use serde::{Deserialize, Serialize};

/// Default number of lines `repository_read` returns when `endLine` is absent.
pub const DEFAULT_MAX_READ_LINES: usize = 200;

/// Default character budget for one `repository_read` body.
pub const DEFAULT_MAX_READ_CHARS: usize = 15_000;

/// Default matched-line cap per file for `repository_grep`.
pub const DEFAULT_GREP_MAX_PER_FILE: usize = 20;

/// Matched-line cap across all files for one `repository_grep` call.
pub const GREP_GLOBAL_MAX_MATCHES: usize = 100;

/// Characters of one grep output line before it is cut with an ellipsis.
pub const GREP_MAX_LINE_CHARS: usize = 200;

/// Characters of one search snippet before it is cut with an ellipsis.
pub const SEARCH_SNIPPET_CHARS: usize = 400;

pub const SEARCH_DEFAULT_LIMIT: usize = 10;
pub const SEARCH_MAX_LIMIT: usize = 20;

/// Maximum file name suggestions attached to a lookup miss.
pub const READ_MAX_SUGGESTIONS: usize = 5;

/// Per-catalog limits. Deserializes from camelCase JSON with every field optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolConfig {
    pub max_read_lines: usize,
    pub max_read_chars: usize,
    pub grep_max_per_file: usize,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            max_read_lines: DEFAULT_MAX_READ_LINES,
            max_read_chars: DEFAULT_MAX_READ_CHARS,
            grep_max_per_file: DEFAULT_GREP_MAX_PER_FILE,
        }
    }
}
