//! Fragment segmenter.
//!
//! Takes a raw text run that is known to contain double-byte characters and
//! splits it into the maximal contiguous double-byte sub-runs, each tagged
//! with the syntax context it sits in. Offsets come straight from the regex
//! match positions, so a run's offset is exact even when the same text
//! occurs more than once in the input.

use std::sync::LazyLock;

use regex::Regex;

static DOUBLE_BYTE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\x00-\xff]+").unwrap());

/// Where the raw text came from. The context flags are origin-specific:
/// mustache detection only makes sense in template text, backtick counting
/// only in script text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Template,
    Script,
}

/// One maximal double-byte run inside the segmented text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Byte offset of the run within the segmented text.
    pub offset: usize,
    pub text: String,
    /// True when the run falls inside a `{{ }}` delimiter pair.
    pub in_mustache: bool,
    /// True when an odd number of unescaped backticks precede the run.
    pub in_template_string: bool,
}

/// Split `text` into its double-byte runs, left to right.
///
/// For script origin, runs whose text also appears quote-wrapped somewhere
/// in `text` are dropped: a string literal inside a template placeholder is
/// already captured as a whole-literal match by the caller, and this guard
/// keeps the placeholder scan from reporting it a second time. The guard is
/// a regex heuristic, not a grammar.
pub fn segment(text: &str, origin: Origin) -> Vec<Run> {
    DOUBLE_BYTE_RUN
        .find_iter(text)
        .filter(|m| origin != Origin::Script || !quoted_elsewhere(text, m.as_str()))
        .map(|m| Run {
            offset: m.start(),
            text: m.as_str().to_string(),
            in_mustache: origin == Origin::Template && inside_mustache(text, m.start(), m.end()),
            in_template_string: origin == Origin::Script
                && inside_template_string(text, m.start()),
        })
        .collect()
}

fn quoted_elsewhere(text: &str, run: &str) -> bool {
    let pattern = format!(r#"["']\s*{}\s*["']"#, regex::escape(run));
    Regex::new(&pattern).map(|re| re.is_match(text)).unwrap_or(false)
}

/// Non-greedy, non-nested mustache match: the nearest `{{` before the run
/// and the first `}}` after that opening must enclose the run, with no
/// further `{{` between them. Nested interpolation is not supported; the
/// innermost opening wins.
fn inside_mustache(text: &str, start: usize, end: usize) -> bool {
    let Some(open) = text[..start].rfind("{{") else {
        return false;
    };
    let Some(close) = text[open + 2..].find("}}").map(|i| open + 2 + i) else {
        return false;
    };
    close >= end && !text[open + 2..close].contains("{{")
}

fn inside_template_string(text: &str, start: usize) -> bool {
    let mut backticks = 0;
    let mut escaped = false;
    for c in text[..start].chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '`' {
            backticks += 1;
        }
    }
    backticks % 2 == 1
}
