//! Line handling shared by every tool: endings normalization, clamped
//! range extraction, and numbered rendering.

/// Split text into lines after normalizing `\r\n` and lone `\r` to `\n`.
///
/// Trailing empty segments are kept, so `split_lines(s).join("\n")` gives
/// back the normalized text exactly.
///
/// # Examples
///
/// ```
/// use repo_tools::lines::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\rc\n"), vec!["a", "b", "c", ""]);
/// ```
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    normalize_line_endings(text)
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Replace `\r\n` and lone `\r` with `\n`.
#[must_use]
pub fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Extract a 1-based inclusive line range.
///
/// `start` is clamped to `[1, total]`; `end` defaults to `total` and is
/// otherwise clamped to `[start, total]`. Never panics on out-of-range input.
#[must_use]
pub fn get_line_range<S: AsRef<str>>(lines: &[S], start: i64, end: Option<i64>) -> Vec<String> {
    let total = lines.len() as i64;
    if total == 0 {
        return Vec::new();
    }
    let start = start.clamp(1, total);
    let end = end.unwrap_or(total).clamp(start, total);
    lines[(start - 1) as usize..end as usize]
        .iter()
        .map(|l| l.as_ref().to_string())
        .collect()
}

/// Render lines as `"{num}: {content}"`, numbers right-aligned to the width
/// of the largest number in the block.
#[must_use]
pub fn format_line_output<S: AsRef<str>>(lines: &[S], start_line: usize) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let last = start_line + lines.len() - 1;
    let width = last.to_string().len();
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}: {}", start_line + i, line.as_ref(), width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Number of lines in `text` as the tools report it: 0 for empty text.
#[must_use]
pub fn line_count(text: &str) -> usize {
    if text.is_empty() { 0 } else { split_lines(text).len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_normalizes_crlf_and_cr() {
        assert_eq!(split_lines("a\r\nb\rc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_keeps_trailing_empty_line() {
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_range_clamps_both_ends() {
        let lines = vec!["a", "b", "c"];
        assert_eq!(get_line_range(&lines, 0, Some(10)), vec!["a", "b", "c"]);
        assert_eq!(get_line_range(&lines, -4, None), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_range_end_never_before_start() {
        let lines = vec!["a", "b", "c", "d", "e", "f"];
        assert_eq!(get_line_range(&lines, 5, Some(2)), vec!["e"]);
    }

    #[test]
    fn test_range_start_past_end_clamps_to_last_line() {
        let lines = vec!["a", "b", "c"];
        assert_eq!(get_line_range(&lines, 9, None), vec!["c"]);
    }

    #[test]
    fn test_range_on_empty_input() {
        let lines: Vec<String> = Vec::new();
        assert!(get_line_range(&lines, 1, Some(3)).is_empty());
    }

    #[test]
    fn test_format_pads_to_widest_number() {
        let lines: Vec<String> = (0..3).map(|i| format!("l{}", i)).collect();
        assert_eq!(format_line_output(&lines, 9), " 9: l0\n10: l1\n11: l2");
    }

    #[test]
    fn test_format_empty_block() {
        let lines: Vec<&str> = Vec::new();
        assert_eq!(format_line_output(&lines, 1), "");
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("foo\nbar"), 2);
        assert_eq!(line_count("foo\r\nbar\r\n"), 3);
    }
}
