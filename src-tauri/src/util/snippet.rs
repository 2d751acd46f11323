use serde::{Deserialize, Serialize};

use crate::util::matcher::find_first_match;

pub const ELLIPSIS: char = '…';

/// Display budget of a snippet. `max_lines * chars_per_line` stands in for real line
/// wrapping, so a snippet may be clipped mid-word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnippetConfig {
    pub max_lines: usize,
    pub chars_per_line: usize,
}

impl Default for SnippetConfig {
    fn default() -> Self { Self { max_lines: 4, chars_per_line: 60 } }
}

impl SnippetConfig {
    pub fn budget(&self) -> usize { self.max_lines.saturating_mul(self.chars_per_line) }

    pub fn extract(&self, text: &str, term: &str) -> String {
        extract_snippet(text, term, self.max_lines, self.chars_per_line)
    }
}

/// Window of `text` around the first case-insensitive occurrence of `term`, or the head of
/// the text when there is no usable term or no match. Offsets are in characters.
pub fn extract_snippet(text: &str, term: &str, max_lines: usize, chars_per_line: usize) -> String {
    let budget = max_lines.saturating_mul(chars_per_line);
    let total = text.chars().count();
    let Some(m) = find_first_match(text, term) else {
        return head_window(text, total, budget);
    };
    // term longer than the budget: no padding, just the match itself
    let context = budget.saturating_sub(term.chars().count()) / 2;
    let start = m.index.saturating_sub(context);
    let end = (m.index + m.length + context).min(total);

    let window = &text[byte_offset(text, start)..byte_offset(text, end)];
    let mut out = String::with_capacity(window.len() + 2 * ELLIPSIS.len_utf8());
    if start > 0 { out.push(ELLIPSIS); }
    out.push_str(window);
    if end < total { out.push(ELLIPSIS); }
    out
}

fn head_window(text: &str, total: usize, budget: usize) -> String {
    let mut out = text[..byte_offset(text, budget)].to_string();
    if total > budget { out.push(ELLIPSIS); }
    out
}

/// Byte offset of the `chars`-th character, or `text.len()` past the end.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map(|(i, _)| i).unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_without_term_is_unchanged() {
        assert_eq!(extract_snippet("Article 197", "", 2, 60), "Article 197");
    }

    #[test]
    fn head_window_gets_trailing_ellipsis() {
        let text = "a".repeat(130);
        let out = extract_snippet(&text, "", 2, 60);
        assert_eq!(out.chars().count(), 121);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn no_match_falls_back_to_head() {
        let text = "b".repeat(50);
        assert_eq!(extract_snippet(&text, "tva", 1, 10), format!("{}…", "b".repeat(10)));
    }

    #[test]
    fn whitespace_term_behaves_like_empty() {
        let text = "un deux trois quatre";
        assert_eq!(extract_snippet(text, "  ", 1, 5), extract_snippet(text, "", 1, 5));
    }

    #[test]
    fn centred_window_gets_both_markers() {
        let text = format!("{}TVA{}", "x".repeat(50), "y".repeat(50));
        // budget 13, context (13 - 3) / 2 = 5
        let out = extract_snippet(&text, "tva", 1, 13);
        assert_eq!(out, "…xxxxxTVAyyyyy…");
    }

    #[test]
    fn match_near_start_has_no_leading_marker() {
        let text = format!("TVA{}", "z".repeat(40));
        let out = extract_snippet(&text, "TVA", 1, 13);
        assert_eq!(out, "TVAzzzzz…");
    }

    #[test]
    fn term_longer_than_budget_brackets_the_match() {
        let text = "avant contribuables après";
        let out = extract_snippet(text, "contribuables", 1, 4);
        assert_eq!(out, "…contribuables…");
    }

    #[test]
    fn multibyte_text_is_sliced_on_char_boundaries() {
        let text = "é".repeat(20) + "impôt" + &"è".repeat(20);
        let out = extract_snippet(&text, "IMPÔT", 1, 9);
        assert_eq!(out, "…ééimpôtèè…");
    }

    #[test]
    fn config_budget() {
        let cfg = SnippetConfig { max_lines: 2, chars_per_line: 60 };
        assert_eq!(cfg.budget(), 120);
        assert_eq!(SnippetConfig::default().budget(), 240);
    }
}
