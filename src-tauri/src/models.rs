use serde::{Deserialize, Serialize};

use crate::util::highlight::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Livre,
    Partie,
    Titre,
    Chapitre,
    Section,
    SousTitre,
    Article,
}

/// One node of the consolidated code, as exported from the hosted database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSection {
    pub id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: SectionType,
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub page_number_start: Option<u32>,
    #[serde(default)]
    pub page_number_end: Option<u32>,
    #[serde(default)]
    pub version_date: Option<String>,
    #[serde(default)]
    pub breadcrumb: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleVersion {
    pub id: i64,
    pub article_id: i64,
    pub version_content: String,
    pub effective_date: String,
}

/// Row returned by both code and full-text searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: i64,
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: SectionType,
    #[serde(default)]
    pub breadcrumb: Option<String>,
}

impl ArticleRecord {
    pub fn content(&self) -> &str { self.content.as_deref().unwrap_or("") }
}

/// What a result row hands to the detail view: the article and the term to highlight there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleLink {
    pub article_id: i64,
    pub search_term: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedSpan {
    pub text: String,
    pub matched: bool,
}

impl From<Span<'_>> for HighlightedSpan {
    fn from(span: Span<'_>) -> Self {
        HighlightedSpan { text: span.text().to_string(), matched: span.is_matched() }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultView {
    pub id: i64,
    pub code: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SectionType,
    pub breadcrumb: String,
    pub snippet: Vec<HighlightedSpan>,
    pub link: ArticleLink,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    pub id: i64,
    pub effective_on: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetailView {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub breadcrumb: String,
    pub updated_on: Option<String>,
    pub content: Vec<HighlightedSpan>,
    pub selected_version: Option<i64>,
    pub versions: Vec<VersionEntry>,
    pub search_term: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSearchView {
    pub query: String,
    pub timestamp: i64,
    pub label: String,
}
