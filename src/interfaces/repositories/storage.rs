use mockall::automock;

use crate::errors::StorageError;

/// Minimal key-value persistence boundary the collection store is built
/// on. Implementations must tolerate keys that were never written
/// (`get` returns `Ok(None)`) and treat `set` as a full overwrite.
#[automock]
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
