//! # Cart Store
//!
//! The shopping cart: at most one line per product, each holding a frozen
//! copy of the product and a positive quantity.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Page Action              Store Call                 Line Change        │
//! │  ───────────              ──────────                 ───────────        │
//! │                                                                         │
//! │  "Add to Cart" ─────────► add(product, n) ─────────► qty += n / push    │
//! │                                                                         │
//! │  − / + buttons ─────────► update_quantity(id, n) ──► qty = n            │
//! │                                 n <= 0 ────────────► line removed       │
//! │                                                                         │
//! │  Trash icon ────────────► remove(id) ──────────────► line removed       │
//! │                                                                         │
//! │  "Proceed to Checkout" ─► checkout() ──────────────► all lines removed  │
//! │                                                                         │
//! │  Every call above persists the whole cart.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use decor_core::{CartLine, Money, Product};

use crate::collection::KeyedCollectionStore;
use crate::error::StoreResult;
use crate::storage::Storage;

/// Storage key of the cart snapshot.
pub const CART_KEY: &str = "ganpati-cart";

/// What was in the cart when checkout was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub item_count: u64,
    pub total: Money,
}

/// Cart lines in the order products were first added.
///
/// ## Invariants
/// - Lines are unique by product id (adding again merges quantities)
/// - Quantities are always > 0 (setting 0 or less removes the line)
#[derive(Debug)]
pub struct CartStore {
    inner: KeyedCollectionStore<CartLine>,
}

impl CartStore {
    /// Opens the cart, starting empty if nothing usable is stored.
    pub fn open(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        let inner = KeyedCollectionStore::open(storage, key, Vec::new);
        debug!(key = %inner.storage_key(), lines = inner.len(), "Cart store opened");
        CartStore { inner }
    }

    pub fn lines(&self) -> &[CartLine] {
        self.inner.items()
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.inner.get(product_id)
    }

    /// Adds `quantity` of `product`.
    ///
    /// If the product is already in the cart its quantity grows and the
    /// existing copy is kept; otherwise a new line with a copy of `product`
    /// is appended. Adding zero does nothing.
    pub fn add(&mut self, product: &Product, quantity: u32) -> StoreResult<()> {
        if quantity == 0 {
            return Ok(());
        }

        if self.inner.contains(product.id.as_str()) {
            self.inner.update(product.id.as_str(), |line| {
                line.quantity = line.quantity.saturating_add(quantity)
            })?;
        } else {
            self.inner.append(CartLine::new(product, quantity))?;
        }

        debug!(product_id = %product.id, quantity, "Added to cart");
        Ok(())
    }

    /// Sets the quantity of a line. Zero or less removes it; values past
    /// `u32::MAX` are clamped.
    ///
    /// Returns `false` if the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> StoreResult<bool> {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let found = self
            .inner
            .update(product_id, |line| line.quantity = quantity)?;
        debug!(product_id = %product_id, quantity, found, "Cart quantity set");
        Ok(found)
    }

    /// Removes the line for `product_id`. Returns `false` if there was none.
    pub fn remove(&mut self, product_id: &str) -> StoreResult<bool> {
        let removed = self.inner.delete(product_id)?;
        debug!(product_id = %product_id, removed, "Removed from cart");
        Ok(removed)
    }

    pub fn clear(&mut self) -> StoreResult<()> {
        self.inner.clear()?;
        debug!("Cart cleared");
        Ok(())
    }

    /// Σ price × quantity over the frozen product copies.
    pub fn total(&self) -> Money {
        self.lines().iter().map(CartLine::line_total).sum()
    }

    /// Σ quantity, shown on the header badge.
    pub fn item_count(&self) -> u64 {
        self.lines().iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Checkout placeholder: no payment is taken, the cart is emptied.
    pub fn checkout(&mut self) -> StoreResult<CheckoutSummary> {
        let summary = CheckoutSummary {
            item_count: self.item_count(),
            total: self.total(),
        };
        self.clear()?;
        info!(
            items = summary.item_count,
            total = %summary.total,
            "Checkout requested, no payment integration; cart cleared"
        );
        Ok(summary)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
