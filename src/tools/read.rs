//! repository_read handler: numbered line ranges of one file.

use serde_json::Value;

use crate::config::READ_MAX_SUGGESTIONS;
use crate::error::ToolError;
use crate::lines::{format_line_output, get_line_range, split_lines};
use crate::{normalize_path_sep, FileStatus, RepoFile};

use super::utils::{arg_i64, cut_chars, required_str};
use super::ToolCatalog;

pub(crate) fn handle_read(ctx: &ToolCatalog, args: &Value) -> Result<String, ToolError> {
    let file_name = required_str(args, "fileName")?;
    let file = resolve_file(&ctx.files, file_name)?;

    let text = file.text();
    if text.is_empty() {
        return Ok(format!("# {} (0 lines)\n[empty file]", file.name));
    }

    let lines = split_lines(text);
    let total = lines.len() as i64;
    let max_lines = ctx.config.max_read_lines.max(1) as i64;

    let start = arg_i64(args, "startLine").unwrap_or(1).max(1);
    let end = match arg_i64(args, "endLine") {
        Some(end) => end.min(total),
        None => start.saturating_add(max_lines - 1).min(total),
    };

    // A start past the end (or past the file) yields an empty range, not an error.
    let selected: Vec<String> = if start > end {
        Vec::new()
    } else {
        get_line_range(&lines, start, Some(end))
    };

    // Character truncation may cut the last line short; the header keeps `end`.
    let joined = selected.join("\n");
    let (body_lines, truncated) = match cut_chars(&joined, ctx.config.max_read_chars) {
        Some(cut) => (cut.split('\n').map(str::to_string).collect::<Vec<_>>(), true),
        None => (selected, false),
    };

    let mut header = format!("# {} (lines {}-{} of {})", file.name, start, end, total);
    if truncated {
        header.push_str(" [truncated]");
    } else if end < total {
        header.push_str(&format!(" [continues to line {}]", total));
    }

    let body = format_line_output(&body_lines, start as usize);
    if body.is_empty() {
        Ok(header)
    } else {
        Ok(format!("{}\n{}", header, body))
    }
}

/// Case-insensitive exact name match among completed files. On a miss, the
/// error carries up to five completed names containing the requested one.
fn resolve_file<'a>(files: &'a [RepoFile], name: &str) -> Result<&'a RepoFile, ToolError> {
    let wanted = normalize_path_sep(name).to_lowercase();
    let key = |f: &RepoFile| normalize_path_sep(&f.name).to_lowercase();

    let completed = || files.iter().filter(|f| f.status == FileStatus::Completed);

    if let Some(file) = completed().find(|f| key(*f) == wanted) {
        return Ok(file);
    }

    let suggestions: Vec<String> = completed()
        .filter(|f| key(*f).contains(&wanted))
        .take(READ_MAX_SUGGESTIONS)
        .map(|f| f.name.clone())
        .collect();

    Err(ToolError::Lookup {
        name: name.to_string(),
        suggestions,
    })
}
