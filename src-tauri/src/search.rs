use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    config::AppConfig,
    error::Result,
    models::{ArticleLink, ArticleRecord, HighlightedSpan, SearchResultView},
    util::{breadcrumb::trim_breadcrumb, highlight::render_highlighted},
};

/// The two lookups the article database offers.
pub trait ArticleSource {
    /// Articles whose code contains `code` (case-insensitive), prefix matches first.
    fn search_by_code(&self, code: &str, limit: usize) -> Result<Vec<ArticleRecord>>;
    /// Full-text lookup over titles and bodies.
    fn search_by_text(&self, query: &str, limit: usize) -> Result<Vec<ArticleRecord>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Code,
    Text,
}

pub(crate) fn order_code_matches(hits: &mut [ArticleRecord], code: &str) {
    let needle = code.to_lowercase();
    hits.sort_by_cached_key(|r| {
        let lc = r.code.to_lowercase();
        (!lc.starts_with(&needle), lc)
    });
}

pub fn run_search<S: ArticleSource + ?Sized>(
    source: &S,
    mode: SearchMode,
    query: &str,
    config: &AppConfig,
) -> Result<Vec<SearchResultView>> {
    let t0 = Instant::now();
    let q = query.trim();
    if q.is_empty() { return Ok(vec![]); }
    let records = match mode {
        SearchMode::Code => source.search_by_code(q, config.code_search_limit)?,
        SearchMode::Text => source.search_by_text(q, config.text_search_limit)?,
    };
    let results: Vec<SearchResultView> = records.into_iter().map(|r| result_row(r, q, config)).collect();
    info!(q, ?mode, n = results.len(), elapsed_ms = t0.elapsed().as_millis() as u64, "search");
    Ok(results)
}

/// The row carries the search term along so the detail view highlights the same thing.
fn result_row(record: ArticleRecord, term: &str, config: &AppConfig) -> SearchResultView {
    let snippet = config.snippet.extract(record.content(), term);
    let spans = render_highlighted(&snippet, term).map(HighlightedSpan::from).collect();
    SearchResultView {
        breadcrumb: trim_breadcrumb(record.breadcrumb.as_deref()),
        snippet: spans,
        link: ArticleLink { article_id: record.id, search_term: term.to_string() },
        id: record.id,
        code: record.code,
        title: record.title,
        kind: record.kind,
    }
}
