use tauri::{async_runtime::spawn_blocking, State};

use codefiscal::{
    catalog::Catalog,
    config::{CATALOG_FILE, INDEX_DIR},
    util::article_index::ArticleIndex,
};

use crate::state::AppState;

/// Rebuilds the on-disk index from `catalog.json`; returns the number of indexed articles.
#[tauri::command]
pub async fn reindex_all(state: State<'_, AppState>) -> Result<u64, String> {
    let catalog_path = state.app_dir.join(CATALOG_FILE);
    let index_dir = state.app_dir.join(INDEX_DIR);
    // Release the open index before its files are replaced
    state.drop_cached();
    let index = spawn_blocking(move || {
        let catalog = Catalog::load(&catalog_path)?;
        ArticleIndex::build_in_dir(&index_dir, &catalog)
    })
    .await
    .map_err(|e| format!("join error: {:?}", e))?
    .map_err(|e| e.to_string())?;
    let n = index.num_articles();
    state.set_index(index);
    Ok(n)
}
