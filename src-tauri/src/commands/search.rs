use tauri::State;

use codefiscal::{
    models::SearchResultView,
    search::{run_search, SearchMode},
};

use crate::state::AppState;

#[tauri::command]
pub fn search(query: String, mode: SearchMode, state: State<AppState>) -> Result<Vec<SearchResultView>, String> {
    // If an index exists, use it exclusively. Until one is built, scan the catalog.
    if let Some(index) = state.index().map_err(|e| e.to_string())? {
        return run_search(index.as_ref(), mode, &query, &state.config).map_err(|e| e.to_string());
    }
    let catalog = state.catalog().map_err(|e| e.to_string())?;
    run_search(catalog.as_ref(), mode, &query, &state.config).map_err(|e| e.to_string())
}
