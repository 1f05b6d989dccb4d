//! # Store Configuration
//!
//! Where snapshots live and which keys they are stored under.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     DECOR_DATA_DIR=/srv/storefront                                     │
//! │     DECOR_PRODUCTS_KEY / DECOR_CART_KEY / DECOR_ABOUT_KEY              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/decor-storefront/storefront.toml (Linux)                 │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     platform data dir, keys ganpati-products / ganpati-cart /          │
//! │     kd-arts-about                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! data_dir = "/srv/storefront"
//!
//! [keys]
//! products = "ganpati-products"
//! cart = "ganpati-cart"
//! about = "kd-arts-about"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::about::ABOUT_KEY;
use crate::cart::CART_KEY;
use crate::error::{StoreError, StoreResult};
use crate::product::PRODUCTS_KEY;
use crate::storage::validate_key;

const CONFIG_FILE_NAME: &str = "storefront.toml";

// =============================================================================
// Storage Keys
// =============================================================================

/// The storage key each store reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub products: String,
    pub cart: String,
    pub about: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        StorageKeys {
            products: PRODUCTS_KEY.to_string(),
            cart: CART_KEY.to_string(),
            about: ABOUT_KEY.to_string(),
        }
    }
}

impl StorageKeys {
    /// Each key must be usable as a file name and distinct from the others.
    pub fn validate(&self) -> StoreResult<()> {
        validate_key(&self.products)?;
        validate_key(&self.cart)?;
        validate_key(&self.about)?;

        if self.products == self.cart || self.products == self.about || self.cart == self.about {
            return Err(StoreError::Config(
                "products, cart and about keys must be distinct".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Store Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding one `<key>.json` file per store.
    pub data_dir: PathBuf,
    pub keys: StorageKeys,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: default_data_dir(),
            keys: StorageKeys::default(),
        }
    }
}

impl StoreConfig {
    /// Config rooted at `data_dir` with the default keys.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            keys: StorageKeys::default(),
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, or `storefront.toml` in the platform
    ///    config directory)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading store config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| StoreError::io(path.display().to_string(), e))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;

        Ok(config)
    }

    /// Writes this configuration as TOML, creating parent directories.
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| StoreError::Config("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::io(parent.display().to_string(), e))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .map_err(|e| StoreError::io(path.display().to_string(), e))?;

        info!(?path, "Store config saved");
        Ok(())
    }

    pub fn validate(&self) -> StoreResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(StoreError::Config("data_dir must not be empty".into()));
        }
        self.keys.validate()
    }

    /// Applies `DECOR_*` overrides from `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("DECOR_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data dir from environment");
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(key) = lookup("DECOR_PRODUCTS_KEY") {
            self.keys.products = key;
        }
        if let Some(key) = lookup("DECOR_CART_KEY") {
            self.keys.cart = key;
        }
        if let Some(key) = lookup("DECOR_ABOUT_KEY") {
            self.keys.about = key;
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("in", "kdarts", "decor-storefront")
}

/// Platform data directory, or `./data` where none can be determined.
fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_keys() {
        let config = StoreConfig::with_data_dir("/tmp/decor");
        assert_eq!(config.keys.products, "ganpati-products");
        assert_eq!(config.keys.cart, "ganpati-cart");
        assert_eq!(config.keys.about, "kd-arts-about");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut config = StoreConfig::with_data_dir("/tmp/decor");

        config.keys.cart = config.keys.products.clone();
        assert!(matches!(config.validate(), Err(StoreError::Config(_))));

        config.keys.cart = "cart/../../etc".to_string();
        assert!(matches!(config.validate(), Err(StoreError::InvalidKey(_))));

        config.keys.cart = String::new();
        assert!(config.validate().is_err());

        let config = StoreConfig::with_data_dir("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("DECOR_DATA_DIR", "/srv/storefront"),
            ("DECOR_CART_KEY", "cart-v2"),
        ]
        .into_iter()
        .collect();

        let mut config = StoreConfig::with_data_dir("/tmp/decor");
        config.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.data_dir, PathBuf::from("/srv/storefront"));
        assert_eq!(config.keys.cart, "cart-v2");
        assert_eq!(config.keys.products, "ganpati-products");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: StoreConfig = toml::from_str(
            r#"
            data_dir = "/srv/storefront"

            [keys]
            about = "about-page"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/storefront"));
        assert_eq!(config.keys.about, "about-page");
        assert_eq!(config.keys.cart, "ganpati-cart");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join(CONFIG_FILE_NAME);

        let mut config = StoreConfig::with_data_dir(dir.path().join("data"));
        config.keys.products = "catalog".to_string();
        config.save(Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let loaded: StoreConfig = toml::from_str(&contents).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "data_dir = [").unwrap();

        assert!(matches!(
            StoreConfig::load(Some(path)),
            Err(StoreError::Config(_))
        ));
    }
}
