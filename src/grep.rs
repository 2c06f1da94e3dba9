//! Line-oriented grep over a single file's text.
//!
//! Produces matched lines with their match spans plus synthesized
//! context-only records, capped by a matched-line budget.

use std::collections::{BTreeMap, BTreeSet};

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::debug;

use crate::lines::split_lines;

/// A single match inside a line. Offsets are byte offsets into the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// A reported line: either a genuine match or a context line around one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineMatch {
    /// 1-based.
    pub line_number: usize,
    pub content: String,
    pub spans: Vec<MatchSpan>,
    pub is_context_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrepOutcome {
    /// Sorted by line number, no duplicates.
    pub matches: Vec<LineMatch>,
    pub truncated: bool,
    /// Matched lines only; context lines are not counted.
    pub match_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrepOptions {
    pub ignore_case: bool,
    pub literal: bool,
    /// Stop after this many matched lines. `None` = unlimited.
    pub max_matches: Option<usize>,
    pub context_lines: usize,
}

impl Default for GrepOptions {
    fn default() -> Self {
        Self {
            ignore_case: true,
            literal: false,
            max_matches: None,
            context_lines: 0,
        }
    }
}

/// Compile the search pattern. Invalid regex silently degrades to a literal
/// match of the same text, so callers never see a pattern error.
///
/// Returns `None` only when even the escaped literal exceeds the regex size
/// limit; such a pattern matches nothing.
#[must_use]
pub fn build_matcher(pattern: &str, ignore_case: bool, literal: bool) -> Option<Regex> {
    if !literal {
        match RegexBuilder::new(pattern).case_insensitive(ignore_case).build() {
            Ok(re) => return Some(re),
            Err(e) => {
                debug!(pattern = %pattern, error = %e, "Invalid regex, falling back to literal match");
            }
        }
    }
    match RegexBuilder::new(&regex::escape(pattern)).case_insensitive(ignore_case).build() {
        Ok(re) => Some(re),
        Err(e) => {
            debug!(pattern = %pattern, error = %e, "Literal pattern too large");
            None
        }
    }
}

/// All non-overlapping matches in `line`, left to right.
///
/// The scan position is advanced by one character past every empty match so
/// patterns like `a*` cannot stall on a position.
#[must_use]
pub fn find_spans(re: &Regex, line: &str) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;
    while pos <= line.len() {
        let Some(m) = re.find_at(line, pos) else { break };
        spans.push(MatchSpan {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        });
        if m.end() > m.start() {
            pos = m.end();
        } else {
            match line[m.end()..].chars().next() {
                Some(ch) => pos = m.end() + ch.len_utf8(),
                None => break,
            }
        }
    }
    spans
}

/// Grep `text` for `pattern`.
#[must_use]
pub fn grep(text: &str, pattern: &str, options: &GrepOptions) -> GrepOutcome {
    match build_matcher(pattern, options.ignore_case, options.literal) {
        Some(re) => grep_with(&re, text, options),
        None => GrepOutcome::default(),
    }
}

/// Grep with an already compiled matcher (reused across files by the grep tool).
#[must_use]
pub fn grep_with(re: &Regex, text: &str, options: &GrepOptions) -> GrepOutcome {
    let lines = split_lines(text);
    let total = lines.len();

    let mut matched: BTreeMap<usize, Vec<MatchSpan>> = BTreeMap::new();
    let mut to_show: BTreeSet<usize> = BTreeSet::new();
    let mut truncated = false;

    // a zero budget is already exhausted
    if options.max_matches == Some(0) {
        return GrepOutcome { matches: Vec::new(), truncated: true, match_count: 0 };
    }

    for (idx, line) in lines.iter().enumerate() {
        let spans = find_spans(re, line);
        if spans.is_empty() {
            continue;
        }
        matched.insert(idx, spans);

        let s = idx.saturating_sub(options.context_lines);
        let e = (idx + options.context_lines).min(total - 1);
        to_show.extend(s..=e);

        if options.max_matches.is_some_and(|max| matched.len() >= max) {
            truncated = true;
            break;
        }
    }

    let match_count = matched.len();
    let matches = to_show
        .into_iter()
        .map(|idx| match matched.remove(&idx) {
            Some(spans) => LineMatch {
                line_number: idx + 1,
                content: lines[idx].clone(),
                spans,
                is_context_only: false,
            },
            None => LineMatch {
                line_number: idx + 1,
                content: lines[idx].clone(),
                spans: Vec::new(),
                is_context_only: true,
            },
        })
        .collect();

    GrepOutcome { matches, truncated, match_count }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(context_lines: usize, max_matches: Option<usize>) -> GrepOptions {
        GrepOptions { context_lines, max_matches, ..GrepOptions::default() }
    }

    #[test]
    fn test_context_window_around_single_match() {
        let out = grep("a\nb\nc", "b", &opts(1, None));
        assert_eq!(out.match_count, 1);
        assert_eq!(out.matches.len(), 3);
        let flags: Vec<bool> = out.matches.iter().map(|m| m.is_context_only).collect();
        assert_eq!(flags, vec![true, false, true]);
        assert_eq!(out.matches[1].line_number, 2);
    }

    #[test]
    fn test_max_matches_truncates() {
        let text = "x\nx\nx\nx\nx";
        let out = grep(text, "x", &opts(0, Some(2)));
        assert_eq!(out.match_count, 2);
        assert!(out.truncated);
        assert_eq!(out.matches.len(), 2);
    }

    #[test]
    fn test_cap_counts_matched_lines_only() {
        let text = "x\nc\nc\nx\nc\nx";
        let out = grep(text, "x", &opts(1, Some(2)));
        assert_eq!(out.match_count, 2);
        assert!(out.truncated);
        assert!(out.matches.iter().all(|m| m.line_number <= 5));
    }

    #[test]
    fn test_exact_cap_reached_on_last_match_is_truncated() {
        let out = grep("x\ny", "x", &opts(0, Some(1)));
        assert!(out.truncated);
        assert_eq!(out.match_count, 1);
    }

    #[test]
    fn test_no_match_means_no_context() {
        let out = grep("a\nb\nc", "zzz", &opts(5, None));
        assert_eq!(out.match_count, 0);
        assert!(out.matches.is_empty());
        assert!(!out.truncated);
    }

    #[test]
    fn test_overlapping_windows_are_merged() {
        let text = (1..=10).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
        let out = grep(&text, "line [46]$", &opts(1, None));
        let numbers: Vec<usize> = out.matches.iter().map(|m| m.line_number).collect();
        assert_eq!(numbers, vec![3, 4, 5, 6, 7]);
        assert_eq!(out.matches.iter().filter(|m| !m.is_context_only).count(), 2);
    }

    #[test]
    fn test_window_clamped_to_file_bounds() {
        let out = grep("hit\nb", "hit", &opts(10, None));
        let numbers: Vec<usize> = out.matches.iter().map(|m| m.line_number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_ignore_case_default_on() {
        let out = grep("Hello", "hello", &GrepOptions::default());
        assert_eq!(out.match_count, 1);
        let strict = GrepOptions { ignore_case: false, ..GrepOptions::default() };
        assert_eq!(grep("Hello", "hello", &strict).match_count, 0);
    }

    #[test]
    fn test_literal_escapes_metacharacters() {
        let literal = GrepOptions { literal: true, ..GrepOptions::default() };
        assert_eq!(grep("a.c\nabc", "a.c", &literal).match_count, 1);
        assert_eq!(grep("a.c\nabc", "a.c", &GrepOptions::default()).match_count, 2);
    }

    #[test]
    fn test_invalid_regex_falls_back_to_literal() {
        let out = grep("call foo(\nother", "foo(", &GrepOptions::default());
        assert_eq!(out.match_count, 1);
        assert_eq!(out.matches[0].spans[0].text, "foo(");
    }

    #[test]
    fn test_spans_are_all_matches_in_order() {
        let out = grep("ab ab ab", "ab", &GrepOptions::default());
        let starts: Vec<usize> = out.matches[0].spans.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![0, 3, 6]);
    }

    #[test]
    fn test_zero_width_matches_advance() {
        let re = build_matcher("x*", false, false).unwrap();
        let spans = find_spans(&re, "ab");
        assert_eq!(spans.len(), 3);
        assert!(spans.iter().all(|s| s.start == s.end));
    }

    #[test]
    fn test_zero_width_advance_on_multibyte() {
        let re = build_matcher("", false, false).unwrap();
        assert_eq!(find_spans(&re, "é€").len(), 3);
    }

    #[test]
    fn test_crlf_text() {
        let out = grep("one\r\ntwo\r\n", "two", &GrepOptions::default());
        assert_eq!(out.matches[0].line_number, 2);
        assert_eq!(out.matches[0].content, "two");
    }
}
