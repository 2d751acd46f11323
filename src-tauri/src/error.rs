use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Local key/value storage could not be read or written. Callers on the UI path are
    /// allowed to log this and carry on with their in-memory state.
    #[error("storage unavailable for `{key}`: {reason}")]
    StorageUnavailable { key: String, reason: String },

    #[error("index error: {0}")]
    Index(#[from] tantivy::TantivyError),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn storage(key: &str, reason: impl ToString) -> Self {
        Error::StorageUnavailable { key: key.to_string(), reason: reason.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
