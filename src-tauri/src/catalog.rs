//! Local export of the code: every section plus the article version history.

use std::{collections::HashSet, fs, io, path::Path};

use serde::{Deserialize, Serialize};
use tantivy::tokenizer::{LowerCaser, RemoveLongFilter, SimpleTokenizer, TextAnalyzer};

use crate::{
    error::Result,
    models::{ArticleRecord, ArticleVersion, CodeSection, SectionType},
    search::{order_code_matches, ArticleSource},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub sections: Vec<CodeSection>,
    #[serde(default)]
    pub versions: Vec<ArticleVersion>,
}

impl Catalog {
    /// A missing file is an empty catalog; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read(path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Catalog::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn articles(&self) -> impl Iterator<Item = &CodeSection> {
        self.sections.iter().filter(|s| s.kind == SectionType::Article)
    }

    pub fn article(&self, id: i64) -> Option<&CodeSection> {
        self.articles().find(|s| s.id == id)
    }

    /// Newest first.
    pub fn versions_for(&self, article_id: i64) -> Vec<&ArticleVersion> {
        let mut out: Vec<&ArticleVersion> = self.versions.iter().filter(|v| v.article_id == article_id).collect();
        out.sort_by(|a, b| b.effective_date.cmp(&a.effective_date));
        out
    }

    pub fn record(section: &CodeSection) -> ArticleRecord {
        ArticleRecord {
            id: section.id,
            code: section.code.clone(),
            title: section.title.clone(),
            content: Some(section.content.clone().unwrap_or_default()),
            kind: section.kind,
            breadcrumb: section.breadcrumb.clone(),
        }
    }
}

/// In-memory scan, used until an index has been built.
impl ArticleSource for Catalog {
    fn search_by_code(&self, code: &str, limit: usize) -> Result<Vec<ArticleRecord>> {
        let needle = code.to_lowercase();
        let mut hits: Vec<ArticleRecord> = self
            .articles()
            .filter(|s| s.code.to_lowercase().contains(&needle))
            .map(Catalog::record)
            .collect();
        order_code_matches(&mut hits, code);
        hits.truncate(limit);
        Ok(hits)
    }

    /// Same terms as the index's default analyzer; every term must appear in the title
    /// or the body. Results keep catalog order.
    fn search_by_text(&self, query: &str, limit: usize) -> Result<Vec<ArticleRecord>> {
        let mut analyzer = text_analyzer();
        let wanted = terms(&mut analyzer, query);
        if wanted.is_empty() { return Ok(Vec::new()); }
        let mut hits = Vec::new();
        for section in self.articles() {
            if hits.len() >= limit { break; }
            let mut present = terms(&mut analyzer, &section.title);
            present.extend(terms(&mut analyzer, section.content.as_deref().unwrap_or("")));
            if wanted.iter().all(|t| present.contains(t)) {
                hits.push(Catalog::record(section));
            }
        }
        Ok(hits)
    }
}

/// Mirrors tantivy's "default" tokenizer used for the index's title and body fields.
fn text_analyzer() -> TextAnalyzer {
    TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(RemoveLongFilter::limit(40))
        .filter(LowerCaser)
        .build()
}

fn terms(analyzer: &mut TextAnalyzer, text: &str) -> HashSet<String> {
    let mut out = HashSet::new();
    let mut stream = analyzer.token_stream(text);
    while stream.advance() {
        out.insert(stream.token().text.clone());
    }
    out
}
