//! Errors surfaced by the command-line front end.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// I/O error (directory walk, snapshot or config file read)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in --args, --snapshot or --config
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Argument validation error
    #[error("{0}")]
    InvalidArgs(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}
