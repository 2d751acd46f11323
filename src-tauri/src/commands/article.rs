use tauri::State;

use codefiscal::{
    article::{article_detail, share_message},
    models::{ArticleDetailView, ArticleLink},
};

use crate::state::AppState;

#[tauri::command]
pub fn get_article(
    article_id: i64,
    search_term: String,
    version_id: Option<i64>,
    state: State<AppState>,
) -> Result<Option<ArticleDetailView>, String> {
    let catalog = state.catalog().map_err(|e| e.to_string())?;
    let link = ArticleLink { article_id, search_term };
    Ok(article_detail(&catalog, &link, version_id))
}

#[tauri::command]
pub fn share_article(article_id: i64, state: State<AppState>) -> Result<Option<String>, String> {
    let catalog = state.catalog().map_err(|e| e.to_string())?;
    Ok(catalog.article(article_id).map(share_message))
}
