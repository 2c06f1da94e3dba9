//! repository_search handler: formats semantic search results.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::config::{SEARCH_DEFAULT_LIMIT, SEARCH_MAX_LIMIT, SEARCH_SNIPPET_CHARS};
use crate::error::ToolError;
use crate::lines::normalize_line_endings;
use crate::semantic::run_query;
use crate::Chunk;

use super::utils::{arg_i64, required_str, truncate_chars};
use super::ToolCatalog;

pub(crate) async fn handle_search(ctx: &ToolCatalog, args: &Value) -> Result<String, ToolError> {
    let query = required_str(args, "query")?;
    let limit = arg_i64(args, "limit")
        .map(|l| l.clamp(1, SEARCH_MAX_LIMIT as i64) as usize)
        .unwrap_or(SEARCH_DEFAULT_LIMIT);

    let mut chunks = run_query(ctx.backend.as_ref(), query, limit).await?;
    chunks.truncate(limit);

    if chunks.is_empty() {
        return Ok(format!("# No results for \"{}\"", query));
    }

    let mut out = Vec::with_capacity(chunks.len() + 1);
    out.push(format!("# {} results for \"{}\"", chunks.len(), query));
    out.extend(chunks.iter().enumerate().map(|(rank, chunk)| format_chunk(rank, chunk)));
    Ok(out.join("\n"))
}

/// `[{score}%] {file}: {snippet}` when scored, else `[{rank}] {file}: {snippet}`.
fn format_chunk(rank: usize, chunk: &Chunk) -> String {
    let tag = match chunk.similarity {
        Some(similarity) => format!("{}%", (f64::from(similarity) * 100.0).round() as i64),
        None => (rank + 1).to_string(),
    };
    let snippet = collapse_newlines(&chunk.text);
    format!("[{}] {}: {}", tag, chunk.file.name, truncate_chars(&snippet, SEARCH_SNIPPET_CHARS))
}

/// Each run of line breaks becomes a single space.
fn collapse_newlines(text: &str) -> String {
    static NEWLINE_RUNS: OnceLock<Option<Regex>> = OnceLock::new();
    let normalized = normalize_line_endings(text);
    match NEWLINE_RUNS.get_or_init(|| Regex::new(r"\n+").ok()) {
        Some(re) => re.replace_all(&normalized, " ").into_owned(),
        None => normalized.replace('\n', " "),
    }
}
