//! Fence scanning.
//!
//! Splits a document into an ordered run of prose and fenced-code segments.
//! Segments partition the input left to right with no gaps and no overlaps;
//! everything that is not a properly terminated backtick fence is prose.

use regex::Regex;
use std::sync::OnceLock;

/// An ephemeral, borrowed run of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Raw substring outside any fence, exactly as it appears in the input.
    Prose(&'a str),
    /// A terminated fence with the triple-backtick markers stripped.
    Code {
        /// Language token from the opening fence; empty when absent.
        language: &'a str,
        /// Body between the fences, untrimmed.
        body: &'a str,
    },
}

// Opening fence, optional language token, newline, non-greedy body, closing
// fence. An opening fence with no matching close does not match at all and
// stays inside the surrounding prose run.
fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"(?s)```(\w*)\n(.*?)```").expect("invalid fence regex"))
}

/// Split `markdown` into ordered segments.
///
/// Empty prose runs (e.g. between two adjacent fences) are omitted; callers
/// never see a zero-length segment.
pub fn segments(markdown: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;

    for caps in fence_regex().captures_iter(markdown) {
        let whole = caps.get(0).expect("group 0 always participates");
        let language = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());

        if whole.start() > last {
            out.push(Segment::Prose(&markdown[last..whole.start()]));
        }
        out.push(Segment::Code { language, body });
        last = whole.end();
    }

    if last < markdown.len() {
        out.push(Segment::Prose(&markdown[last..]));
    }

    out
}

/// Strip only the outermost all-whitespace lines of a fence body.
///
/// Interior blank lines, the indentation of the first code line, and trailing
/// spaces on code lines all survive; trimming more than this corrupts
/// indentation-sensitive source code.
pub fn trim_outer_blank_lines(body: &str) -> &str {
    let mut s = body;
    while let Some(i) = s.find('\n') {
        if s[..i].trim().is_empty() {
            s = &s[i + 1..];
        } else {
            break;
        }
    }
    while let Some(i) = s.rfind('\n') {
        if s[i + 1..].trim().is_empty() {
            s = &s[..i];
        } else {
            break;
        }
    }
    // A body that was nothing but blank lines collapses to empty.
    if s.trim().is_empty() { "" } else { s }
}
