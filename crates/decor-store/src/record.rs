//! # Singleton Record Store
//!
//! A single record mirrored to one storage entry. Used for the company
//! "about" information, of which exactly one exists.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::error::StoreResult;
use crate::storage::{load_snapshot, save_snapshot, Storage};

/// One record with write-through persistence. There is no create or delete:
/// the record always exists, starting from its default.
///
/// A change whose snapshot cannot be saved is reverted before the error is
/// returned.
#[derive(Debug)]
pub struct SingletonRecordStore<T> {
    storage: Arc<dyn Storage>,
    storage_key: String,
    record: T,
}

impl<T> SingletonRecordStore<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Loads the snapshot under `storage_key`, or `default()` if there is
    /// none or it does not decode.
    pub fn open(
        storage: Arc<dyn Storage>,
        storage_key: impl Into<String>,
        default: impl FnOnce() -> T,
    ) -> Self {
        let storage_key = storage_key.into();
        let record = load_snapshot(storage.as_ref(), &storage_key).unwrap_or_else(default);
        SingletonRecordStore {
            storage,
            storage_key,
            record,
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn get(&self) -> &T {
        &self.record
    }

    /// Mutates the record in place, then persists.
    pub fn update<F>(&mut self, f: F) -> StoreResult<()>
    where
        F: FnOnce(&mut T),
    {
        let previous = self.record.clone();
        f(&mut self.record);
        self.persist_or_restore(previous)
    }

    /// Swaps in a whole new record, then persists.
    pub fn replace(&mut self, record: T) -> StoreResult<()> {
        let previous = std::mem::replace(&mut self.record, record);
        self.persist_or_restore(previous)
    }

    fn persist_or_restore(&mut self, previous: T) -> StoreResult<()> {
        if let Err(e) = save_snapshot(self.storage.as_ref(), &self.storage_key, &self.record) {
            self.record = previous;
            warn!(key = %self.storage_key, error = %e, "Snapshot not saved, change reverted");
            return Err(e);
        }
        Ok(())
    }
}
