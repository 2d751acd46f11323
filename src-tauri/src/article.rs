//! Article detail: current text or a past version, highlighted with the term the user
//! searched for.

use time::{macros::format_description, Date};

use crate::{
    catalog::Catalog,
    models::{ArticleDetailView, ArticleLink, CodeSection, HighlightedSpan, VersionEntry},
    util::{breadcrumb::trim_breadcrumb, highlight::render_highlighted},
};

/// `YYYY-MM-DD` (a trailing time part is ignored) as `dd/mm/yyyy`. Anything else is returned
/// unchanged.
pub fn display_date(raw: &str) -> String {
    let day = raw.get(..10).unwrap_or(raw);
    match Date::parse(day, format_description!("[year]-[month]-[day]")) {
        Ok(d) => d
            .format(format_description!("[day]/[month]/[year]"))
            .unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

pub fn share_message(section: &CodeSection) -> String {
    format!("{} - {}\n\n{}", section.code, section.title, section.content.as_deref().unwrap_or(""))
}

/// `version_id` selects a past version of this article; an unknown id shows the current text.
pub fn article_detail(catalog: &Catalog, link: &ArticleLink, version_id: Option<i64>) -> Option<ArticleDetailView> {
    let section = catalog.article(link.article_id)?;
    let versions = catalog.versions_for(section.id);
    let selected = version_id.and_then(|id| versions.iter().find(|v| v.id == id).copied());
    let content = match selected {
        Some(v) => v.version_content.as_str(),
        None => section.content.as_deref().unwrap_or(""),
    };
    Some(ArticleDetailView {
        id: section.id,
        code: section.code.clone(),
        title: section.title.clone(),
        breadcrumb: trim_breadcrumb(section.breadcrumb.as_deref()),
        updated_on: section.version_date.as_deref().map(display_date),
        content: render_highlighted(content, &link.search_term).map(HighlightedSpan::from).collect(),
        selected_version: selected.map(|v| v.id),
        versions: versions
            .iter()
            .map(|v| VersionEntry { id: v.id, effective_on: display_date(&v.effective_date) })
            .collect(),
        search_term: link.search_term.clone(),
    })
}
