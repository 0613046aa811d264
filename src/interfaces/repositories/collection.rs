use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::repositories::storage::KeyValueStorage;

/// Store for the named collections. Every collection is read fully into
/// memory on load and fully overwritten on save; there is no partial
/// update and no transaction.
///
/// Loading never fails: an absent key establishes the seed as the new
/// persisted baseline, and an unreadable or corrupt value falls back to
/// the seed without touching the stored bytes.
pub struct CollectionStore<S> {
    storage: Arc<S>,
}

impl<S> Clone for CollectionStore<S> {
    fn clone(&self) -> Self {
        CollectionStore {
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<S> CollectionStore<S>
where
    S: KeyValueStorage,
{
    pub fn new(storage: Arc<S>) -> Self {
        CollectionStore { storage }
    }

    /// Reads the collection at `key`, seeding storage on first load.
    pub fn load<T>(&self, key: &str, seed: &[T]) -> Vec<T>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let raw = match self.storage.get(key) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Unreadable storage for {key}, using seed: {e}");
                return seed.to_vec();
            }
        };

        let Some(raw) = raw else {
            let seeded = seed.to_vec();
            self.save(key, &seeded);
            tracing::debug!("Seeded collection {key} with {} items", seeded.len());
            return seeded;
        };

        // An empty stored array is a legitimate value (the user deleted
        // everything); only null or corrupt values recover on the seed,
        // and the stored bytes are left in place.
        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Corrupt collection at {key}, using seed: {e}");
                seed.to_vec()
            }
        }
    }

    /// Serializes `items` and overwrites the value at `key`. Persistence
    /// is best effort: failures are logged and swallowed.
    pub fn save<T>(&self, key: &str, items: &[T])
    where
        T: Serialize,
    {
        let payload = match serde_json::to_string(items) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Failed to serialize collection {key}: {e}");
                return;
            }
        };

        if let Err(e) = self.storage.set(key, &payload) {
            tracing::warn!("Failed to persist collection {key}: {e}");
        }
    }

    /// Load, apply `f` in memory, persist, and return the result.
    pub fn mutate<T, F>(&self, key: &str, seed: &[T], f: F) -> Vec<T>
    where
        T: Serialize + DeserializeOwned + Clone,
        F: FnOnce(&mut Vec<T>),
    {
        let mut items = self.load(key, seed);
        f(&mut items);
        self.save(key, &items);
        items
    }
}
