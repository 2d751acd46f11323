#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

mod commands;
mod state;

use std::path::PathBuf;

use tauri::Manager;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

fn resolve_app_dir(app: &tauri::AppHandle) -> PathBuf {
    // Use Tauri's resolver to get per-app data directory
    app.path_resolver().app_data_dir().unwrap_or_else(|| {
        // Fallback to executable directory if resolver fails
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tauri::Builder::default()
        .setup(|app| {
            let app_dir = resolve_app_dir(&app.app_handle());
            std::fs::create_dir_all(&app_dir).ok();
            tracing::info!(dir = %app_dir.display(), "data directory");
            app.manage(AppState::new(app_dir));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::search::search,
            commands::recent::list_recent_searches,
            commands::recent::record_recent_search,
            commands::article::get_article,
            commands::article::share_article,
            commands::indexer::reindex_all,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
