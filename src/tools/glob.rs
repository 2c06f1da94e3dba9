//! repository_glob handler: file names matching a glob pattern.

use serde_json::Value;

use crate::error::ToolError;
use crate::glob::GlobMatcher;
use crate::RepoFile;

use super::utils::{file_summary_line, required_str, sort_by_name};
use super::ToolCatalog;

pub(crate) fn handle_glob(ctx: &ToolCatalog, args: &Value) -> Result<String, ToolError> {
    let pattern = required_str(args, "pattern")?;
    let matcher = GlobMatcher::new(pattern);

    let mut files: Vec<&RepoFile> = ctx.files.iter().filter(|f| matcher.is_match(&f.name)).collect();
    sort_by_name(&mut files);

    let mut out = Vec::with_capacity(files.len() + 1);
    out.push(format!("# {} files matching \"{}\"", files.len(), pattern));
    out.extend(files.into_iter().map(file_summary_line));
    Ok(out.join("\n"))
}
