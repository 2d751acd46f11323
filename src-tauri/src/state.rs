use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use codefiscal::{
    catalog::Catalog,
    config::{AppConfig, CATALOG_FILE, INDEX_DIR},
    error::Result,
    recent::{RecentSearches, SequencedSave},
    store::FileStore,
    util::article_index::ArticleIndex,
};

pub struct AppState {
    pub app_dir: PathBuf,
    pub config: AppConfig,
    pub catalog: Mutex<Option<Arc<Catalog>>>,    // lazily loaded
    pub index: Mutex<Option<Arc<ArticleIndex>>>, // lazily opened
    pub recent: Mutex<RecentSearches<FileStore>>,
    /// Orders the background writes of `recent`.
    pub recent_writes: Arc<SequencedSave>,
}

impl AppState {
    pub fn new(app_dir: PathBuf) -> Self {
        let config = AppConfig::load(&app_dir);
        let recent = RecentSearches::load(FileStore::new(app_dir.clone()));
        Self {
            app_dir,
            config,
            catalog: Mutex::new(None),
            index: Mutex::new(None),
            recent: Mutex::new(recent),
            recent_writes: Arc::new(SequencedSave::new()),
        }
    }

    pub fn catalog(&self) -> Result<Arc<Catalog>> {
        let mut slot = self.catalog.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(c) = slot.as_ref() { return Ok(c.clone()); }
        let catalog = Arc::new(Catalog::load(&self.app_dir.join(CATALOG_FILE))?);
        *slot = Some(catalog.clone());
        Ok(catalog)
    }

    /// `None` until an index has been built in the data directory.
    pub fn index(&self) -> Result<Option<Arc<ArticleIndex>>> {
        let mut slot = self.index.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(i) = slot.as_ref() { return Ok(Some(i.clone())); }
        let dir = self.app_dir.join(INDEX_DIR);
        if !dir.exists() { return Ok(None); }
        let index = Arc::new(ArticleIndex::open_in_dir(&dir)?);
        *slot = Some(index.clone());
        Ok(Some(index))
    }

    pub fn set_index(&self, index: ArticleIndex) {
        *self.index.lock().unwrap_or_else(|p| p.into_inner()) = Some(Arc::new(index));
    }

    /// Forget cached handles so the next command reloads from disk.
    pub fn drop_cached(&self) {
        *self.catalog.lock().unwrap_or_else(|p| p.into_inner()) = None;
        *self.index.lock().unwrap_or_else(|p| p.into_inner()) = None;
    }
}
