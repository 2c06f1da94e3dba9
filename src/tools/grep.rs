//! repository_grep handler: regex search across searchable files with
//! per-line, per-file, and global budgets.

use serde_json::Value;
use tracing::debug;

use crate::config::{GREP_GLOBAL_MAX_MATCHES, GREP_MAX_LINE_CHARS};
use crate::error::ToolError;
use crate::glob::GlobMatcher;
use crate::grep::{build_matcher, grep_with, GrepOptions};
use crate::RepoFile;

use super::utils::{arg_bool, arg_i64, arg_str, required_str, truncate_chars};
use super::ToolCatalog;

/// Context lines when the caller does not ask for a specific amount.
const DEFAULT_CONTEXT_LINES: i64 = 2;

pub(crate) fn handle_grep(ctx: &ToolCatalog, args: &Value) -> Result<String, ToolError> {
    let pattern = required_str(args, "pattern")?;
    let file_filter = arg_str(args, "filePattern")
        .filter(|p| !p.trim().is_empty())
        .map(GlobMatcher::new);
    let ignore_case = arg_bool(args, "ignoreCase").unwrap_or(true);
    let literal = arg_bool(args, "literal").unwrap_or(false);
    let context_lines = arg_i64(args, "contextLines").unwrap_or(DEFAULT_CONTEXT_LINES).max(0) as usize;
    let per_file_cap = ctx.config.grep_max_per_file.max(1);

    let candidates: Vec<&RepoFile> = ctx
        .files
        .iter()
        .filter(|f| f.is_searchable())
        .filter(|f| file_filter.as_ref().is_none_or(|m| m.is_match(&f.name)))
        .collect();
    let files_searched = candidates.len();

    let mut total_matches = 0usize;
    let mut body: Vec<String> = Vec::new();

    if let Some(re) = build_matcher(pattern, ignore_case, literal) {
        for file in candidates {
            let remaining = GREP_GLOBAL_MAX_MATCHES - total_matches;
            if remaining == 0 {
                break;
            }
            let options = GrepOptions {
                ignore_case,
                literal,
                max_matches: Some(per_file_cap.min(remaining)),
                context_lines,
            };
            let outcome = grep_with(&re, file.text(), &options);
            if outcome.match_count == 0 {
                continue;
            }
            total_matches += outcome.match_count;

            for (i, m) in outcome.matches.iter().enumerate() {
                let sep = if m.is_context_only { '-' } else { ':' };
                let content = truncate_chars(&m.content, GREP_MAX_LINE_CHARS);
                if i == 0 {
                    body.push(format!("{}:{}{}{}", file.name, m.line_number, sep, content));
                } else {
                    body.push(format!("{}{}{}", m.line_number, sep, content));
                }
            }
        }
    }

    let limit_reached = total_matches >= GREP_GLOBAL_MAX_MATCHES;
    debug!(pattern = %pattern, total_matches, files_searched, limit_reached, "Grep finished");

    let mut header = format!("# {} matches in {} files", total_matches, files_searched);
    if limit_reached {
        header.push_str(" (limit reached)");
    }

    let mut out = Vec::with_capacity(body.len() + 1);
    out.push(header);
    out.extend(body);
    Ok(out.join("\n"))
}
