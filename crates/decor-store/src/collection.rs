//! # Keyed Collection Store
//!
//! Generic ordered collection of entities, unique by key, mirrored to one
//! storage entry. Both the product catalog and the cart are built on it.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  open(storage, key, default)                                            │
//! │       │                                                                 │
//! │       ├── snapshot decodes ──────► items = snapshot                     │
//! │       └── missing / corrupt ─────► items = default()                    │
//! │                                                                         │
//! │  prepend / append / update / delete / clear                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  mutate items in memory ──► persist() ──► storage.set(key, json)        │
//! │                                   │                                     │
//! │                                   └── write fails ──► undo, return Err  │
//! │                                                                         │
//! │  Every mutating call persists, including lookup misses.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

use decor_core::{CartLine, Product};

use crate::error::{StoreError, StoreResult};
use crate::storage::{load_snapshot, save_snapshot, Storage};

/// An entity identified by a key that never changes.
pub trait Keyed {
    type Key: ?Sized + PartialEq + fmt::Debug;

    fn key(&self) -> &Self::Key;
}

impl Keyed for Product {
    type Key = str;

    fn key(&self) -> &str {
        &self.id
    }
}

/// Cart lines are keyed by the product they hold.
impl Keyed for CartLine {
    type Key = str;

    fn key(&self) -> &str {
        self.product_id()
    }
}

/// Ordered, key-unique collection with write-through persistence.
///
/// Mutations take `&mut self`; reads hand out shared borrows, so callers can
/// never mutate the collection behind the store's back.
#[derive(Debug)]
pub struct KeyedCollectionStore<T> {
    storage: Arc<dyn Storage>,
    storage_key: String,
    items: Vec<T>,
}

impl<T> KeyedCollectionStore<T>
where
    T: Keyed + Clone + Serialize + DeserializeOwned,
{
    /// Loads the snapshot under `storage_key`, or `default()` if there is
    /// none or it does not decode.
    pub fn open(
        storage: Arc<dyn Storage>,
        storage_key: impl Into<String>,
        default: impl FnOnce() -> Vec<T>,
    ) -> Self {
        let storage_key = storage_key.into();
        let items = load_snapshot(storage.as_ref(), &storage_key).unwrap_or_else(default);
        KeyedCollectionStore {
            storage,
            storage_key,
            items,
        }
    }

    /// Storage entry this collection is mirrored to.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.get(key).is_some()
    }

    /// Inserts at the front. Fails if the key is already present.
    pub fn prepend(&mut self, item: T) -> StoreResult<()> {
        self.ensure_absent(&item)?;
        self.items.insert(0, item);
        self.persist_or_undo(|items| {
            items.remove(0);
        })
    }

    /// Inserts at the back. Fails if the key is already present.
    pub fn append(&mut self, item: T) -> StoreResult<()> {
        self.ensure_absent(&item)?;
        self.items.push(item);
        self.persist_or_undo(|items| {
            items.pop();
        })
    }

    /// Applies `f` to the entity with `key`. Returns `false` if there is none.
    ///
    /// If `f` changes the entity's key, the entity is restored and
    /// `StoreError::KeyChanged` is returned.
    pub fn update<F>(&mut self, key: &T::Key, f: F) -> StoreResult<bool>
    where
        F: FnOnce(&mut T),
    {
        let Some(index) = self.position(key) else {
            self.persist()?;
            return Ok(false);
        };

        let original = self.items[index].clone();
        f(&mut self.items[index]);
        if self.items[index].key() != key {
            self.items[index] = original;
            return Err(StoreError::KeyChanged {
                store: self.storage_key.clone(),
                key: format!("{:?}", key),
            });
        }

        self.persist_or_undo(|items| items[index] = original)?;
        Ok(true)
    }

    /// Removes the entity with `key`. Returns `false` if there was none.
    pub fn delete(&mut self, key: &T::Key) -> StoreResult<bool> {
        let Some(index) = self.position(key) else {
            self.persist()?;
            return Ok(false);
        };

        let removed = self.items.remove(index);
        self.persist_or_undo(|items| items.insert(index, removed))?;
        Ok(true)
    }

    pub fn clear(&mut self) -> StoreResult<()> {
        let previous = std::mem::take(&mut self.items);
        self.persist_or_undo(|items| *items = previous)
    }

    fn position(&self, key: &T::Key) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    fn ensure_absent(&self, item: &T) -> StoreResult<()> {
        if self.contains(item.key()) {
            return Err(StoreError::DuplicateKey {
                store: self.storage_key.clone(),
                key: format!("{:?}", item.key()),
            });
        }
        Ok(())
    }

    /// Full overwrite of the stored snapshot.
    fn persist(&self) -> StoreResult<()> {
        save_snapshot(self.storage.as_ref(), &self.storage_key, &self.items)
    }

    /// Persists the change just made, or reverts it with `undo` so memory
    /// keeps matching the last saved snapshot.
    fn persist_or_undo<F>(&mut self, undo: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Vec<T>),
    {
        if let Err(e) = self.persist() {
            undo(&mut self.items);
            warn!(key = %self.storage_key, error = %e, "Snapshot not saved, change reverted");
            return Err(e);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
