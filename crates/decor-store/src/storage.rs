//! # Storage Backends
//!
//! The durable key-value store that snapshots are mirrored to, plus the
//! load/save helpers every store goes through.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Snapshot Persistence                               │
//! │                                                                         │
//! │  ProductStore   CartStore   AboutInfoStore                             │
//! │       │             │             │                                     │
//! │       │ key:        │ key:        │ key:                                │
//! │       │ ganpati-    │ ganpati-    │ kd-arts-                            │
//! │       │ products    │ cart        │ about                               │
//! │       ▼             ▼             ▼                                     │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │        Arc<dyn Storage> (shared)         │                           │
//! │  │  get(key) / set(key, json) / remove(key) │                           │
//! │  └───────────────┬─────────────────────────┘                           │
//! │          ┌───────┴────────┐                                            │
//! │          ▼                ▼                                             │
//! │   MemoryStorage      FileStorage                                       │
//! │   (tests, demo)      <data_dir>/<key>.json                              │
//! │                                                                         │
//! │  Each store is the only reader and writer of its own key.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
#[cfg(test)]
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Storage Trait
// =============================================================================

/// A string-keyed store of UTF-8 text values.
///
/// Methods take `&self` so one backend can be shared by every store behind
/// an `Arc`; implementations use interior mutability.
pub trait Storage: Send + Sync + fmt::Debug {
    /// Returns the value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Rejects keys that cannot double as file names.
pub fn validate_key(key: &str) -> StoreResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-process storage. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        let entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        validate_key(key)?;
        let mut entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// File Storage
// =============================================================================

/// One `<key>.json` file per key inside a data directory.
///
/// ## Write Strategy
/// Values are written to `<key>.json.tmp` and renamed over the target, so a
/// crash mid-write leaves either the old or the new snapshot, never half of
/// one.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens (and creates if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(dir.display().to_string(), e))?;
        debug!(dir = %dir.display(), "File storage opened");
        Ok(FileStorage { dir })
    }

    /// The data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| StoreError::io(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(key, e))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }
}

// =============================================================================
// Snapshot Helpers
// =============================================================================

/// Reads and decodes the snapshot under `key`.
///
/// Returns `None` when the key is absent, unreadable, or does not decode as
/// `T`; callers substitute their default. Decoding is the only shape check.
pub fn load_snapshot<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key = %key, "No snapshot stored, using default");
            return None;
        }
        Err(e) => {
            warn!(key = %key, error = %e, "Failed to read snapshot, using default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => {
            debug!(key = %key, bytes = raw.len(), "Snapshot loaded");
            Some(value)
        }
        Err(e) => {
            warn!(key = %key, error = %e, "Stored snapshot does not decode, using default");
            None
        }
    }
}

/// Serializes `value` and overwrites the snapshot under `key`.
pub fn save_snapshot<T: Serialize + ?Sized>(
    storage: &dyn Storage,
    key: &str,
    value: &T,
) -> StoreResult<()> {
    let json = serde_json::to_string(value).map_err(|source| StoreError::Serialization {
        key: key.to_string(),
        source,
    })?;
    storage.set(key, &json)?;
    debug!(key = %key, bytes = json.len(), "Snapshot saved");
    Ok(())
}

// =============================================================================
// Test Support
// =============================================================================

/// Memory storage whose writes can be switched off, for exercising the
/// stores' behavior when a snapshot cannot be saved.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FlakyStorage {
    inner: MemoryStorage,
    fail_writes: AtomicBool,
}

#[cfg(test)]
impl FlakyStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check(&self, key: &str) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::io(
                key,
                std::io::Error::new(ErrorKind::Other, "disk full"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
impl Storage for FlakyStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check(key)?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.check(key)?;
        self.inner.remove(key)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
