use tauri::{async_runtime::spawn_blocking, State};
use tracing::warn;

use codefiscal::{
    models::RecentSearchView,
    recent::{now_timestamp, views},
};

use crate::state::AppState;

#[tauri::command]
pub fn list_recent_searches(state: State<AppState>) -> Result<Vec<RecentSearchView>, String> {
    let recent = state.recent.lock().map_err(|e| e.to_string())?;
    Ok(views(recent.entries(), now_timestamp()))
}

/// Updates the list right away; the file is rewritten in the background.
#[tauri::command]
pub fn record_recent_search(query: String, state: State<AppState>) -> Result<Vec<RecentSearchView>, String> {
    let now = now_timestamp();
    let (entries, store, ticket) = {
        let mut recent = state.recent.lock().map_err(|e| e.to_string())?;
        if !recent.apply(&query, now) {
            return Ok(views(recent.entries(), now));
        }
        (recent.entries().to_vec(), recent.store().clone(), state.recent_writes.ticket())
    };
    let writes = state.recent_writes.clone();
    let list = entries.clone();
    spawn_blocking(move || {
        if let Err(e) = writes.save(ticket, &store, &list) {
            warn!(error = %e, "could not persist recent searches");
        }
    });
    Ok(views(&entries, now))
}
