//! # decor-store: Write-Through Stores for the Decorations Storefront
//!
//! This crate owns the storefront's mutable state. Each store keeps its
//! contents in memory and writes a full JSON snapshot to a key-value
//! backend after every change.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Data Flow                               │
//! │                                                                         │
//! │  Page action (add to cart, upload product, edit about)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   decor-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌─────────────────┐    │   │
//! │  │   │ ProductStore  │  │   CartStore   │  │ AboutInfoStore  │    │   │
//! │  │   └───────┬───────┘  └───────┬───────┘  └────────┬────────┘    │   │
//! │  │           ▼                  ▼                   ▼             │   │
//! │  │   ┌───────────────────────────────┐  ┌─────────────────────┐   │   │
//! │  │   │ KeyedCollectionStore<T>       │  │ SingletonRecord-    │   │   │
//! │  │   │ (collection.rs)               │  │ Store<T> (record.rs)│   │   │
//! │  │   └───────────────┬───────────────┘  └──────────┬──────────┘   │   │
//! │  │                   └──────────────┬──────────────┘              │   │
//! │  │                                  ▼                             │   │
//! │  │                  Arc<dyn Storage> (storage.rs)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data_dir>/ganpati-products.json, ganpati-cart.json, kd-arts-about.json│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - Storage trait, memory and file backends, snapshot helpers
//! - [`collection`] - Generic keyed collection with write-through
//! - [`record`] - Generic single-record store with write-through
//! - [`product`], [`cart`], [`about`] - The three storefront stores
//! - [`defaults`] - Starter catalog and placeholder company info
//! - [`config`] - Data directory and storage keys
//! - [`storefront`] - Opens all stores on one backend
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use decor_store::{StoreConfig, Storefront};
//!
//! let config = StoreConfig::load(None)?;
//! let mut shop = Storefront::open(&config)?;
//!
//! let featured = shop.products.featured(4).len();
//! shop.cart.clear()?;
//! # let _ = featured;
//! # Ok::<(), decor_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod about;
pub mod cart;
pub mod collection;
pub mod config;
pub mod defaults;
pub mod error;
pub mod product;
pub mod record;
pub mod storage;
pub mod storefront;

// =============================================================================
// Re-exports
// =============================================================================

pub use about::{AboutInfoStore, ABOUT_KEY};
pub use cart::{CartStore, CheckoutSummary, CART_KEY};
pub use collection::{Keyed, KeyedCollectionStore};
pub use config::{StorageKeys, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use product::{ProductStore, PRODUCTS_KEY};
pub use record::SingletonRecordStore;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use storefront::Storefront;
