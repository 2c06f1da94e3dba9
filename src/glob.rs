//! Glob → regex compiler for snapshot file names.
//!
//! Paths and patterns are separator-normalized (`\` → `/`) and matched
//! case-insensitively. Supported syntax: `*`, `**`, `**/`, `?`, `[...]`,
//! `[!...]`, `{a,b}`. Anything else is matched literally.

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::normalize_path_sep;

/// A compiled glob pattern.
#[derive(Debug, Clone)]
pub enum GlobMatcher {
    Regex(Regex),
    /// Lowercased pattern used for containment when the regex would not compile.
    Substring(String),
}

impl GlobMatcher {
    /// Compile `pattern`. Never fails: a pattern the regex engine rejects
    /// degrades to a case-insensitive substring check.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let normalized = normalize_path_sep(pattern);
        let source = glob_to_regex(&normalized);
        match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(re) => GlobMatcher::Regex(re),
            Err(e) => {
                debug!(pattern = %pattern, error = %e, "Glob did not compile, using substring match");
                GlobMatcher::Substring(normalized.to_lowercase())
            }
        }
    }

    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        let path = normalize_path_sep(path);
        match self {
            GlobMatcher::Regex(re) => re.is_match(&path),
            GlobMatcher::Substring(needle) => path.to_lowercase().contains(needle.as_str()),
        }
    }
}

/// One-shot convenience: compile `pattern` and test `path`.
#[must_use]
pub fn match_glob(path: &str, pattern: &str) -> bool {
    GlobMatcher::new(pattern).is_match(path)
}

/// Translate a (separator-normalized) glob into an anchored regex source.
pub(crate) fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2 + 2);
    out.push('^');

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    i += 1;
                    out.push_str(".*");
                    if chars.get(i + 1) == Some(&'/') {
                        // the slash after `**` is optional
                        i += 1;
                        out.push_str("/?");
                    }
                } else {
                    out.push_str("[^/]*");
                }
            }
            '?' => out.push_str("[^/]"),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    push_class(&mut out, &chars[i + 1..end]);
                    i = end;
                }
                None => out.push_str(r"\["),
            },
            '{' => match chars[i + 1..].iter().position(|&ch| ch == '}') {
                Some(offset) => {
                    let end = i + 1 + offset;
                    let body: String = chars[i + 1..end].iter().collect();
                    let options: Vec<String> = body.split(',').map(regex::escape).collect();
                    out.push_str("(?:");
                    out.push_str(&options.join("|"));
                    out.push(')');
                    i = end;
                }
                None => out.push_str(r"\{"),
            },
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
        }
        i += 1;
    }

    out.push('$');
    out
}

/// Index of the `]` closing the class opened at `open`, if the class has a body.
fn class_end(chars: &[char], open: usize) -> Option<usize> {
    let mut body_start = open + 1;
    if chars.get(body_start) == Some(&'!') {
        body_start += 1;
    }
    let offset = chars.get(body_start..)?.iter().position(|&ch| ch == ']')?;
    if offset == 0 {
        return None;
    }
    Some(body_start + offset)
}

fn push_class(out: &mut String, body: &[char]) {
    let (negated, body) = match body.split_first() {
        Some((&'!', rest)) => (true, rest),
        _ => (false, body),
    };
    out.push('[');
    if negated {
        out.push('^');
    }
    for &ch in body {
        // characters with meaning inside a regex class
        if matches!(ch, '\\' | '[' | ']' | '^' | '&' | '~') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push(']');
}
