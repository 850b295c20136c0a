//! YAML frontmatter stripping.
//!
//! A frontmatter block is a leading `---` line, one or more lines of
//! content, and a closing `---` line. Only a block anchored at the very
//! start of the note counts; `---` lines further down are slide or
//! thematic-break syntax and must be left alone.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a frontmatter block at the start of the note, including the
/// newline after the closing delimiter when present.
static FRONTMATTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A---\n(?s:.+?)\n---\n?").unwrap());

/// Remove a leading frontmatter block, if any.
///
/// Notes that do not begin with a complete block pass through
/// untouched: an unclosed opening `---`, an empty note, or a block
/// starting anywhere after byte 0 are all left as-is. There is no
/// partial strip.
pub fn strip_frontmatter(text: &str) -> &str {
    match FRONTMATTER_REGEX.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}
