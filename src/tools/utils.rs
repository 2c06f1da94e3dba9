//! Shared helpers for tool handlers: argument extraction, name ordering,
//! and output truncation.

use std::cmp::Ordering;

use serde_json::Value;

use crate::error::ToolError;
use crate::lines::line_count;
use crate::RepoFile;

/// Marker appended to text cut by a character budget.
pub(crate) const ELLIPSIS: &str = "...";

// ─── Argument extraction ────────────────────────────────────────────

pub(crate) fn arg_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(|v| v.as_str())
}

/// A string argument that must be present and non-blank.
pub(crate) fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, ToolError> {
    match arg_str(args, key) {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ToolError::Validation(key.to_string())),
    }
}

/// Integer argument. Accepts JSON numbers (fractions floor) and numeric strings.
pub(crate) fn arg_i64(args: &Value, key: &str) -> Option<i64> {
    match args.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.floor() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Boolean argument. Accepts JSON booleans and `"true"`/`"false"` strings.
pub(crate) fn arg_bool(args: &Value, key: &str) -> Option<bool> {
    match args.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

// ─── Formatting ─────────────────────────────────────────────────────

/// Case-insensitive name order, ties broken by the raw name so output is stable.
pub(crate) fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

pub(crate) fn sort_by_name(files: &mut [&RepoFile]) {
    files.sort_by(|a, b| compare_names(&a.name, &b.name));
}

/// `"{name} ({lines}L, {chars}C)"`.
pub(crate) fn file_summary_line(file: &RepoFile) -> String {
    let text = file.text();
    format!("{} ({}L, {}C)", file.name, line_count(text), text.chars().count())
}

/// Cut `s` to `max_chars` characters, appending [`ELLIPSIS`] when cut.
pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &s[..byte_idx], ELLIPSIS),
        None => s.to_string(),
    }
}

/// First `max_chars` characters of `s`, without a marker. Returns `None` when nothing was cut.
pub(crate) fn cut_chars(s: &str, max_chars: usize) -> Option<&str> {
    s.char_indices().nth(max_chars).map(|(byte_idx, _)| &s[..byte_idx])
}
