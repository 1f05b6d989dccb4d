//! # Product Store
//!
//! The product catalog: the admin panel creates, edits and deletes products;
//! every other page reads them.
//!
//! ## Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add(NewProduct)                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  id = now in epoch milliseconds ("1718000000123")                       │
//! │       │                                                                 │
//! │       ├── unused ─────────► use it                                      │
//! │       └── taken ──────────► +1 until unused                             │
//! │                                                                         │
//! │  Two adds within the same millisecond still get distinct ids.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use decor_core::catalog::{distinct_categories, featured_products, CatalogStats, ProductFilter};
use decor_core::{NewProduct, Product, ProductPatch};

use crate::collection::KeyedCollectionStore;
use crate::defaults::default_products;
use crate::error::StoreResult;
use crate::storage::Storage;

/// Storage key of the catalog snapshot.
pub const PRODUCTS_KEY: &str = "ganpati-products";

/// The product catalog, most recently added first.
///
/// ## Usage
/// ```rust
/// use std::sync::Arc;
/// use decor_core::{Money, NewProduct};
/// use decor_store::{MemoryStorage, ProductStore, PRODUCTS_KEY};
///
/// let mut store = ProductStore::open(Arc::new(MemoryStorage::new()), PRODUCTS_KEY);
/// let diya = store
///     .add(NewProduct {
///         name: "Clay Diya".into(),
///         description: "Hand-painted".into(),
///         price: Money::from_rupees(40),
///         images: vec!["https://example.com/diya.jpeg".into()],
///         category: "Lighting".into(),
///         seller: "Heritage Crafts".into(),
///         featured: false,
///     })
///     .unwrap();
/// assert_eq!(store.list()[0].id, diya.id);
/// ```
#[derive(Debug)]
pub struct ProductStore {
    inner: KeyedCollectionStore<Product>,
}

impl ProductStore {
    /// Opens the catalog, falling back to the starter catalog.
    pub fn open(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        let inner = KeyedCollectionStore::open(storage, key, default_products);
        debug!(
            key = %inner.storage_key(),
            products = inner.len(),
            "Product store opened"
        );
        ProductStore { inner }
    }

    pub fn list(&self) -> &[Product] {
        self.inner.items()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.inner.get(id)
    }

    /// Creates a product at the front of the catalog and returns it.
    ///
    /// No validation happens here; form input goes through
    /// [`decor_core::validation::validate_product_form`] first.
    pub fn add(&mut self, data: NewProduct) -> StoreResult<Product> {
        let now = Utc::now();
        let id = self.next_id(now);
        let product = Product::from_new(id, now, data);

        self.inner.prepend(product.clone())?;
        info!(product_id = %product.id, name = %product.name, "Product added");
        Ok(product)
    }

    /// Merges `patch` into the product with `id`.
    ///
    /// Returns `false` (and changes nothing) if no such product exists.
    pub fn update(&mut self, id: &str, patch: ProductPatch) -> StoreResult<bool> {
        let found = self.inner.update(id, |product| product.apply(patch))?;
        debug!(product_id = %id, found, "Product updated");
        Ok(found)
    }

    /// Removes the product with `id`. Returns `false` if it was not present.
    pub fn delete(&mut self, id: &str) -> StoreResult<bool> {
        let removed = self.inner.delete(id)?;
        if removed {
            info!(product_id = %id, "Product deleted");
        }
        Ok(removed)
    }

    /// Flips the featured flag. Returns `false` if no such product exists.
    pub fn toggle_featured(&mut self, id: &str) -> StoreResult<bool> {
        let found = self
            .inner
            .update(id, |product| product.featured = !product.featured)?;
        debug!(product_id = %id, found, "Featured flag toggled");
        Ok(found)
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(self.list())
    }

    /// The first `limit` featured products.
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        featured_products(self.list(), limit)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_products(self.list())
    }

    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        filter.apply(self.list())
    }

    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        while self.inner.contains(candidate.to_string().as_str()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FlakyStorage, MemoryStorage};
    use decor_core::catalog::HOME_FEATURED_LIMIT;
    use decor_core::Money;

    fn new_product(name: &str, category: &str, rupees: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{} description", name),
            price: Money::from_rupees(rupees),
            images: vec!["https://example.com/p.jpeg".to_string()],
            category: category.to_string(),
            seller: "Test Seller".to_string(),
            featured: false,
        }
    }

    fn open_store() -> (Arc<MemoryStorage>, ProductStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = ProductStore::open(storage.clone(), PRODUCTS_KEY);
        (storage, store)
    }

    #[test]
    fn test_opens_with_starter_catalog() {
        let (_, store) = open_store();
        assert_eq!(store.len(), 4);
        assert_eq!(store.get("1").unwrap().name, "Premium Ganpati Idol - Large");
    }

    #[test]
    fn test_add_prepends_with_unique_ids() {
        let (_, mut store) = open_store();

        let a = store.add(new_product("Toran", "Decor", 450)).unwrap();
        let b = store.add(new_product("Kalash", "Decor", 650)).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.list()[0].id, b.id);
        assert_eq!(store.list()[1].id, a.id);
        assert_eq!(store.len(), 6);
        assert!(a.id.parse::<i64>().is_ok());
    }

    #[test]
    fn test_next_id_skips_taken_ids() {
        let (_, mut store) = open_store();
        let now = Utc::now();
        let taken = now.timestamp_millis().to_string();

        store
            .inner
            .prepend(Product::from_new(
                taken,
                now,
                new_product("Existing", "Decor", 10),
            ))
            .unwrap();

        assert_eq!(store.next_id(now), (now.timestamp_millis() + 1).to_string());
    }

    #[test]
    fn test_failed_add_leaves_catalog_unchanged() {
        let storage = Arc::new(FlakyStorage::new());
        let mut store = ProductStore::open(storage.clone(), PRODUCTS_KEY);
        let before = store.list().to_vec();

        storage.fail_writes(true);
        assert!(store.add(new_product("Toran", "Decor", 450)).is_err());
        assert!(store.delete("1").is_err());
        assert!(store.toggle_featured("3").is_err());
        assert_eq!(store.list(), before.as_slice());

        storage.fail_writes(false);
        store.add(new_product("Toran", "Decor", 450)).unwrap();
        let torans = store.list().iter().filter(|p| p.name == "Toran").count();
        assert_eq!(torans, 1);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_update_merges_patch() {
        let (_, mut store) = open_store();

        let patch = ProductPatch {
            name: Some("Ganpati Idol - XL".to_string()),
            price: Some(Money::from_rupees(3200)),
            ..Default::default()
        };
        assert!(store.update("1", patch).unwrap());

        let product = store.get("1").unwrap();
        assert_eq!(product.name, "Ganpati Idol - XL");
        assert_eq!(product.price, Money::from_rupees(3200));
        assert_eq!(product.category, "Idols");
    }

    #[test]
    fn test_update_missing_is_noop() {
        let (_, mut store) = open_store();
        let before = store.list().to_vec();

        assert!(!store.update("nope", ProductPatch::featured(true)).unwrap());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_delete() {
        let (_, mut store) = open_store();

        assert!(!store.delete("404").unwrap());
        assert_eq!(store.len(), 4);

        assert!(store.delete("2").unwrap());
        assert!(store.get("2").is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_toggle_featured() {
        let (_, mut store) = open_store();
        assert!(!store.get("3").unwrap().featured);

        assert!(store.toggle_featured("3").unwrap());
        assert!(store.get("3").unwrap().featured);
        assert!(!store.toggle_featured("missing").unwrap());
    }

    #[test]
    fn test_categories_are_distinct() {
        let (_, mut store) = open_store();
        store.add(new_product("Another Idol", "Idols", 900)).unwrap();

        let categories = store.categories();
        assert_eq!(categories.iter().filter(|c| *c == "Idols").count(), 1);
        assert_eq!(categories[0], "Idols");
        assert_eq!(categories.len(), 4);
    }

    #[test]
    fn test_featured_and_stats() {
        let (_, store) = open_store();

        let featured: Vec<&str> = store
            .featured(HOME_FEATURED_LIMIT)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(featured, vec!["1", "2", "4"]);

        let stats = store.stats();
        assert_eq!(stats.total_products, 4);
        assert_eq!(stats.featured_products, 3);
        assert_eq!(stats.total_value, Money::from_rupees(3750));
        assert_eq!(stats.categories, 4);
    }

    #[test]
    fn test_filter_delegates_to_catalog() {
        let (_, store) = open_store();
        let filter = ProductFilter::from_controls("DIYA", "", "500-1000").unwrap();

        let ids: Vec<&str> = store.filter(&filter).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn test_changes_survive_reopen() {
        let (storage, mut store) = open_store();
        let added = store.add(new_product("Toran", "Decor", 450)).unwrap();
        store.delete("4").unwrap();

        let reopened = ProductStore::open(storage, PRODUCTS_KEY);
        assert_eq!(reopened.list(), store.list());
        assert_eq!(reopened.get(&added.id), Some(&added));
    }
}
