//! Error taxonomy for tool calls.
//!
//! None of these ever escape a tool handler: they are rendered into the
//! `{"error": "..."}` payload by `ToolCallResult::from_error`.

use thiserror::Error;

/// Failures a tool can report back to the calling agent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// A required argument is absent or empty.
    #[error("{0} is required")]
    Validation(String),

    /// The requested file is not in the snapshot.
    #[error("{}", lookup_message(.name, .suggestions))]
    Lookup {
        name: String,
        suggestions: Vec<String>,
    },

    /// The external semantic search backend failed.
    #[error("Semantic search failed: {0}")]
    Upstream(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

fn lookup_message(name: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        format!("File not found: \"{}\"", name)
    } else {
        format!("File not found: \"{}\". Did you mean: {}?", name, suggestions.join(", "))
    }
}
