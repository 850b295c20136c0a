//! Slide-break insertion.
//!
//! Scans a note line by line and inserts a `---` separator before
//! every H1/H2 heading after the first, so each top-level section
//! becomes its own slide. Deeper headings stay inside their slide.

use regex::Regex;
use std::sync::LazyLock;

/// Matches an H1 or H2 heading line. H3 and deeper are not slide
/// boundaries.
static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,2} ").unwrap());

/// The separator line understood by the slide renderer.
const SLIDE_SEPARATOR: &str = "---";

/// Insert a slide separator before every H1/H2 heading except the
/// first one encountered.
///
/// Pure function of the input text: notes without headings come back
/// unchanged, and the first heading never gets a leading separator
/// even when it is not the first line of the note.
pub fn insert_slide_breaks(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut first_heading = true;

    for line in text.split('\n') {
        if HEADING_REGEX.is_match(line) {
            if !first_heading {
                out.push(SLIDE_SEPARATOR);
            }
            first_heading = false;
        }
        out.push(line);
    }

    out.join("\n")
}
