//! # Store Error Types
//!
//! Error types for storage and store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / toml errors                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds key and context                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Presentation layer shows a generic "could not save" message           │
//! │                                                                         │
//! │  NOT errors: lookup misses (Ok(false) / None) and undecodable          │
//! │  snapshots on open (replaced by the default value)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Storage and store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the storage backend failed.
    ///
    /// ## When This Occurs
    /// - Data directory not writable
    /// - Disk full
    #[error("Storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Encoding a snapshot failed.
    #[error("Failed to serialize snapshot for '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A storage key that cannot be used as an entry name.
    #[error("Invalid storage key '{0}': use letters, digits, '-', '_' or '.'")]
    InvalidKey(String),

    /// Inserting an entity whose key is already present.
    #[error("Duplicate key in '{store}': {key}")]
    DuplicateKey { store: String, key: String },

    /// An update closure tried to change an entity's key.
    ///
    /// The entity is restored to its pre-update value.
    #[error("Key of {key} in '{store}' is immutable")]
    KeyChanged { store: String, key: String },

    /// The in-memory backend's lock was poisoned by a panicking writer.
    #[error("Storage lock poisoned")]
    LockPoisoned,

    /// Configuration could not be loaded or is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// Wraps an I/O error with the key being accessed.
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::Config(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::DuplicateKey {
            store: "ganpati-products".to_string(),
            key: "\"1\"".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate key in 'ganpati-products': \"1\"");

        let err = StoreError::io(
            "ganpati-cart",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("Storage I/O failed for 'ganpati-cart'"));
    }

    #[test]
    fn test_toml_error_converts_to_config() {
        let err: StoreError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, StoreError::Config(_)));
    }
}
