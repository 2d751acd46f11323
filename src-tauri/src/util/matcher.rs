//! Literal, case-insensitive term lookup inside article text.

use regex::{Regex, RegexBuilder};

/// Position of a match, counted in characters (not bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermMatch {
    pub index: usize,
    pub length: usize,
}

/// Escape every regex metacharacter so `term` is matched as plain text.
pub fn escape_for_literal_match(term: &str) -> String {
    regex::escape(term)
}

/// Case-insensitive literal pattern for `term`. Blank terms never match, so they get no pattern.
pub(crate) fn literal_pattern(term: &str) -> Option<Regex> {
    if term.trim().is_empty() { return None; }
    match RegexBuilder::new(&escape_for_literal_match(term)).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            // only reachable when the term blows the compiled size limit
            tracing::debug!(error = %e, "search term rejected");
            None
        }
    }
}

pub fn find_first_match(text: &str, term: &str) -> Option<TermMatch> {
    let re = literal_pattern(term)?;
    let m = re.find(text)?;
    Some(TermMatch {
        index: text[..m.start()].chars().count(),
        length: m.as_str().chars().count(),
    })
}
