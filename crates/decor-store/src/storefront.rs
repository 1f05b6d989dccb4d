//! # Storefront
//!
//! Opens all three stores against one shared storage backend.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StoreConfig ──► FileStorage(data_dir) ──► Arc<dyn Storage>             │
//! │                                                 │                       │
//! │                  ┌──────────────────────────────┼──────────────┐        │
//! │                  ▼                              ▼              ▼        │
//! │            ProductStore                    CartStore    AboutInfoStore  │
//! │            keys.products                   keys.cart    keys.about      │
//! │                                                                         │
//! │  The stores never call each other.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use tracing::info;

use crate::about::AboutInfoStore;
use crate::cart::CartStore;
use crate::config::{StorageKeys, StoreConfig};
use crate::error::StoreResult;
use crate::product::ProductStore;
use crate::storage::{FileStorage, MemoryStorage, Storage};

/// The storefront's state: catalog, cart and company info.
///
/// Fields are public so a page can hold mutable borrows of two stores at
/// once (e.g. read a product, add it to the cart).
///
/// ## Usage
/// ```rust
/// use decor_store::Storefront;
///
/// let mut shop = Storefront::in_memory();
/// let idol = shop.products.get("1").cloned().unwrap();
/// shop.cart.add(&idol, 2).unwrap();
/// assert_eq!(shop.cart.item_count(), 2);
/// ```
#[derive(Debug)]
pub struct Storefront {
    pub products: ProductStore,
    pub cart: CartStore,
    pub about: AboutInfoStore,
}

impl Storefront {
    /// Opens file-backed stores under `config.data_dir`.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        config.validate()?;
        let storage = FileStorage::open(&config.data_dir)?;
        info!(data_dir = %config.data_dir.display(), "Opening storefront");
        Ok(Self::with_storage(Arc::new(storage), &config.keys))
    }

    /// Stores backed by process memory, with the default keys.
    pub fn in_memory() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()), &StorageKeys::default())
    }

    /// Opens the three stores on a shared backend.
    pub fn with_storage(storage: Arc<dyn Storage>, keys: &StorageKeys) -> Self {
        Storefront {
            products: ProductStore::open(storage.clone(), keys.products.as_str()),
            cart: CartStore::open(storage.clone(), keys.cart.as_str()),
            about: AboutInfoStore::open(storage, keys.about.as_str()),
        }
    }
}
