mod errors;
mod local_email_store;
mod storage;

pub use errors::{PersistenceError, StorageError};
pub use local_email_store::LocalEmailStore;
pub use storage::{FileStorage, InMemoryStorage, KeyValueStore};
