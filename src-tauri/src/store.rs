//! Key/value persistence on the device, one JSON document per key.

use std::{collections::HashMap, fs, io, path::PathBuf, sync::Mutex};

use crate::error::{Error, Result};

pub trait KeyValueStore {
    /// `Ok(None)` when nothing was ever stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    /// Replaces whatever was stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Stores `<key>.json` files in the application data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    fn path(&self, key: &str) -> PathBuf { self.dir.join(format!("{key}.json")) }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage(key, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| Error::storage(key, e))?;
        // write-then-rename so a crash never leaves half a document behind
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|e| Error::storage(key, e))?;
        fs::rename(&tmp, self.path(key)).map_err(|e| Error::storage(key, e))
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().map_err(|e| Error::storage(key, e))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().map_err(|e| Error::storage(key, e))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> { (**self).get_item(key) }
    fn set_item(&self, key: &str, value: &str) -> Result<()> { (**self).set_item(key, value) }
}
