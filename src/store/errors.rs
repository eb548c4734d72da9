use crate::helpers::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum StorageError {
    #[error("Failed to access the storage directory.")]
    Io(#[from] std::io::Error),
    #[error("The storage lock was poisoned by a panicking writer.")]
    Poisoned,
    #[error("The storage backend is unavailable: {0}")]
    Unavailable(String),
}

impl std::fmt::Debug for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(thiserror::Error)]
pub enum PersistenceError {
    #[error("Failed to read or write the email registry.")]
    Unavailable(#[source] StorageError),
    #[error("Failed to encode the email registry.")]
    Encode(#[source] serde_json::Error),
}

impl std::fmt::Debug for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
