use std::{fs, path::Path, time::Instant};

use once_cell::sync::Lazy;
use rayon::prelude::*;
use tantivy::{
    collector::{DocSetCollector, TopDocs},
    query::{QueryParser, RegexQuery},
    schema::{Field, IndexRecordOption, Schema, SchemaBuilder, TextFieldIndexing, TextOptions, Value, INDEXED, STORED, STRING},
    DocAddress, Index, IndexReader, IndexWriter, Searcher, TantivyDocument,
};
use tracing::{debug, info};

use crate::{
    catalog::Catalog,
    error::Result,
    models::{ArticleRecord, SectionType},
    search::{order_code_matches, ArticleSource},
    util::matcher::escape_for_literal_match,
};

const WRITER_HEAP: usize = 50 * 1024 * 1024;

#[derive(Clone, Copy)]
pub struct IndexFields {
    pub id: Field,
    pub code: Field,
    /// lowercased code, matched with a regex for "contains"
    pub code_key: Field,
    pub title: Field,
    pub body: Field,
    pub kind: Field,
    pub breadcrumb: Field,
}

static SCHEMA: Lazy<(Schema, IndexFields)> = Lazy::new(build_schema);

fn schema() -> (Schema, IndexFields) { SCHEMA.clone() }

fn build_schema() -> (Schema, IndexFields) {
    let mut sb = SchemaBuilder::default();
    let text_indexing = TextFieldIndexing::default()
        .set_tokenizer("default")
        .set_index_option(IndexRecordOption::WithFreqsAndPositions);
    let text_opts = TextOptions::default().set_stored().set_indexing_options(text_indexing);
    let id = sb.add_i64_field("id", STORED | INDEXED);
    let code = sb.add_text_field("code", STORED);
    let code_key = sb.add_text_field("code_key", STRING);
    let title = sb.add_text_field("title", text_opts.clone());
    let body = sb.add_text_field("body", text_opts);
    let kind = sb.add_text_field("kind", STRING | STORED);
    let breadcrumb = sb.add_text_field("breadcrumb", STORED);
    let schema = sb.build();
    (schema, IndexFields { id, code, code_key, title, body, kind, breadcrumb })
}

/// Full-text index over the catalog's articles.
pub struct ArticleIndex {
    index: Index,
    reader: IndexReader,
    fields: IndexFields,
}

impl ArticleIndex {
    /// Drops whatever is in `dir` and indexes the catalog from scratch.
    pub fn build_in_dir(dir: &Path, catalog: &Catalog) -> Result<Self> {
        if dir.exists() { fs::remove_dir_all(dir)?; }
        fs::create_dir_all(dir)?;
        let (sch, fields) = schema();
        let index = Index::create_in_dir(dir, sch)?;
        Self::populate(index, fields, catalog)
    }

    pub fn build_in_ram(catalog: &Catalog) -> Result<Self> {
        let (sch, fields) = schema();
        Self::populate(Index::create_in_ram(sch), fields, catalog)
    }

    pub fn open_in_dir(dir: &Path) -> Result<Self> {
        let (_, fields) = schema();
        let index = Index::open_in_dir(dir)?;
        let reader = index.reader()?;
        Ok(Self { index, reader, fields })
    }

    fn populate(index: Index, fields: IndexFields, catalog: &Catalog) -> Result<Self> {
        let t0 = Instant::now();
        let mut writer: IndexWriter = index.writer_with_num_threads(1, WRITER_HEAP)?;

        // Documents are built in parallel and added serially
        let articles: Vec<_> = catalog.articles().collect();
        let docs: Vec<TantivyDocument> = articles
            .par_iter()
            .map(|section| {
                let mut doc = TantivyDocument::default();
                doc.add_i64(fields.id, section.id);
                doc.add_text(fields.code, &section.code);
                doc.add_text(fields.code_key, section.code.to_lowercase());
                doc.add_text(fields.title, &section.title);
                doc.add_text(fields.body, section.content.as_deref().unwrap_or(""));
                doc.add_text(fields.kind, kind_name(section.kind));
                if let Some(b) = &section.breadcrumb {
                    doc.add_text(fields.breadcrumb, b);
                }
                doc
            })
            .collect();
        let n = docs.len();
        for doc in docs {
            writer.add_document(doc)?;
        }
        writer.commit()?;

        let reader = index.reader()?;
        info!(articles = n, elapsed_ms = t0.elapsed().as_millis() as u64, "article index built");
        Ok(Self { index, reader, fields })
    }

    pub fn num_articles(&self) -> u64 { self.reader.searcher().num_docs() }

    fn record(&self, searcher: &Searcher, addr: DocAddress) -> Result<ArticleRecord> {
        let f = self.fields;
        let document: TantivyDocument = searcher.doc::<TantivyDocument>(addr)?;
        let text = |field: Field| document.get_first(field).and_then(|v| v.as_str()).map(|s| s.to_string());
        Ok(ArticleRecord {
            id: document.get_first(f.id).and_then(|v| v.as_i64()).unwrap_or_default(),
            code: text(f.code).unwrap_or_default(),
            title: text(f.title).unwrap_or_default(),
            content: Some(text(f.body).unwrap_or_default()),
            kind: text(f.kind).and_then(|k| parse_kind(&k)).unwrap_or(SectionType::Article),
            breadcrumb: text(f.breadcrumb),
        })
    }
}

impl ArticleSource for ArticleIndex {
    fn search_by_code(&self, code: &str, limit: usize) -> Result<Vec<ArticleRecord>> {
        let pattern = format!(".*{}.*", escape_for_literal_match(&code.to_lowercase()));
        let query = RegexQuery::from_pattern(&pattern, self.fields.code_key)?;
        let searcher = self.reader.searcher();
        let addrs = searcher.search(&query, &DocSetCollector)?;
        let mut hits = addrs.into_iter().map(|addr| self.record(&searcher, addr)).collect::<Result<Vec<_>>>()?;
        order_code_matches(&mut hits, code);
        hits.truncate(limit);
        Ok(hits)
    }

    fn search_by_text(&self, query: &str, limit: usize) -> Result<Vec<ArticleRecord>> {
        let mut qp = QueryParser::for_index(&self.index, vec![self.fields.title, self.fields.body]);
        qp.set_conjunction_by_default();
        let (parsed, errors) = qp.parse_query_lenient(query);
        if !errors.is_empty() {
            debug!(q = query, errors = errors.len(), "query parsed leniently");
        }
        let searcher = self.reader.searcher();
        let top_docs = searcher.search(&*parsed, &TopDocs::with_limit(limit.max(1)))?;
        let mut results = Vec::with_capacity(top_docs.len());
        for (_score, addr) in top_docs.into_iter().take(limit) {
            results.push(self.record(&searcher, addr)?);
        }
        Ok(results)
    }
}

fn kind_name(kind: SectionType) -> &'static str {
    match kind {
        SectionType::Livre => "livre",
        SectionType::Partie => "partie",
        SectionType::Titre => "titre",
        SectionType::Chapitre => "chapitre",
        SectionType::Section => "section",
        SectionType::SousTitre => "sous_titre",
        SectionType::Article => "article",
    }
}

fn parse_kind(name: &str) -> Option<SectionType> {
    Some(match name {
        "livre" => SectionType::Livre,
        "partie" => SectionType::Partie,
        "titre" => SectionType::Titre,
        "chapitre" => SectionType::Chapitre,
        "section" => SectionType::Section,
        "sous_titre" => SectionType::SousTitre,
        "article" => SectionType::Article,
        _ => return None,
    })
}
