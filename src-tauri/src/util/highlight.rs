//! Splits a snippet into plain and matched pieces for emphasis in the result list and the
//! article view.

use regex::Regex;
use serde::Serialize;

use crate::util::matcher::literal_pattern;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Span<'a> {
    Plain(&'a str),
    Matched(&'a str),
}

impl<'a> Span<'a> {
    pub fn text(&self) -> &'a str {
        match *self { Span::Plain(s) | Span::Matched(s) => s }
    }

    pub fn is_matched(&self) -> bool { matches!(self, Span::Matched(_)) }
}

/// Lazy span sequence over one snippet. Cloning restarts from the current position; a fresh
/// call to [`render_highlighted`] starts over.
#[derive(Debug, Clone)]
pub struct Highlights<'a> {
    snippet: &'a str,
    pattern: Option<Regex>,
    pos: usize,
    pending: Option<(usize, usize)>,
}

pub fn render_highlighted<'a>(snippet: &'a str, term: &str) -> Highlights<'a> {
    Highlights { snippet, pattern: literal_pattern(term), pos: 0, pending: None }
}

impl<'a> Iterator for Highlights<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        if let Some((start, end)) = self.pending.take() {
            self.pos = end;
            return Some(Span::Matched(&self.snippet[start..end]));
        }
        if self.pos >= self.snippet.len() { return None; }
        let rest_start = self.pos;
        let found = self.pattern.as_ref().and_then(|re| re.find_at(self.snippet, rest_start));
        match found {
            Some(m) if m.start() == rest_start => {
                self.pos = m.end();
                Some(Span::Matched(m.as_str()))
            }
            Some(m) => {
                self.pending = Some((m.start(), m.end()));
                self.pos = m.start();
                Some(Span::Plain(&self.snippet[rest_start..m.start()]))
            }
            None => {
                self.pos = self.snippet.len();
                Some(Span::Plain(&self.snippet[rest_start..]))
            }
        }
    }
}

impl std::iter::FusedIterator for Highlights<'_> {}
