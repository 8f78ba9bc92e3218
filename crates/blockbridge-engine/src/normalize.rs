//! Fence repair for serializer output.
//!
//! The external serializer may emit fenced code without the newline after the
//! opening fence, without a newline before the closing fence, or with stray
//! blank lines inside the body. Feeding that back into the segmenter on the
//! next load would mis-segment the document, so every serialized document is
//! routed through [`normalize_fenced_code`] before persistence.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::segment::trim_outer_blank_lines;

// Unlike the segmenter's pattern this one does not require a newline after
// the language token: the malformed shapes are exactly what it must match.
fn loose_fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"(?s)```(\w*)(.*?)```").expect("invalid fence regex"))
}

/// Rewrite every terminated fence into canonical form:
/// `` ``` `` + language + newline + body + newline + `` ``` ``.
///
/// Non-fenced regions pass through byte-identical, and the function is
/// idempotent: applying it to its own output changes nothing.
pub fn normalize_fenced_code(markdown: &str) -> String {
    loose_fence_regex()
        .replace_all(markdown, |caps: &Captures<'_>| {
            let language = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            format!("```{language}\n{}\n```", trim_outer_blank_lines(body))
        })
        .into_owned()
}
