//! repository_ls handler: every file in the snapshot, sorted by name.

use crate::error::ToolError;
use crate::RepoFile;

use super::utils::{file_summary_line, sort_by_name};
use super::ToolCatalog;

pub(crate) fn handle_ls(ctx: &ToolCatalog) -> Result<String, ToolError> {
    let mut files: Vec<&RepoFile> = ctx.files.iter().collect();
    sort_by_name(&mut files);

    let mut out = Vec::with_capacity(files.len() + 1);
    out.push(format!("# {} files", files.len()));
    out.extend(files.into_iter().map(file_summary_line));
    Ok(out.join("\n"))
}
