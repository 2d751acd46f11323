use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::util::snippet::SnippetConfig;

pub const CONFIG_FILE: &str = "config.json";
pub const CATALOG_FILE: &str = "catalog.json";
pub const INDEX_DIR: &str = "index";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub snippet: SnippetConfig,
    pub code_search_limit: usize,
    pub text_search_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { snippet: SnippetConfig::default(), code_search_limit: 10, text_search_limit: 20 }
    }
}

impl AppConfig {
    /// Reads `config.json` from the data directory; anything missing or unreadable falls back
    /// to the defaults.
    pub fn load(app_dir: &Path) -> Self {
        let p = app_dir.join(CONFIG_FILE);
        match fs::read(&p) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(path = %p.display(), error = %e, "ignoring malformed config");
                AppConfig::default()
            }),
            Err(_) => AppConfig::default(),
        }
    }
}
