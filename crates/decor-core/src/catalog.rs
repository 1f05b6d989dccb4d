//! # Catalog Helpers
//!
//! Pure functions over a product list: browsing filters, featured selection,
//! distinct categories and the admin dashboard numbers.
//!
//! These are computed from store state on demand; nothing here is cached or
//! persisted.
//!
//! ## Browsing Filter
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Products page                                                          │
//! │                                                                         │
//! │  search "diya"   ──┐                                                    │
//! │  category "All"  ──┼──► ProductFilter::matches(product)                 │
//! │  price "500-1000"──┘        name/description contains (case-insens.)    │
//! │                             AND category equal (or unset)               │
//! │                             AND min <= price <= max (inclusive)         │
//! │                                                                         │
//! │  "Showing 2 of 4 products"                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;

/// Number of featured products shown on the home page.
pub const HOME_FEATURED_LIMIT: usize = 4;

// =============================================================================
// Price Range
// =============================================================================

/// Inclusive price bounds for catalog browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRange {
    pub min: Money,
    /// `None` means no upper bound.
    pub max: Option<Money>,
}

impl PriceRange {
    pub const fn new(min: Money, max: Option<Money>) -> Self {
        PriceRange { min, max }
    }

    /// True when `price` lies within the bounds (both inclusive).
    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }

    /// The ranges offered in the price dropdown, with their labels.
    pub fn presets() -> [(&'static str, PriceRange); 4] {
        [
            (
                "Under ₹500",
                PriceRange::new(Money::zero(), Some(Money::from_rupees(500))),
            ),
            (
                "₹500 - ₹1000",
                PriceRange::new(Money::from_rupees(500), Some(Money::from_rupees(1000))),
            ),
            (
                "₹1000 - ₹2000",
                PriceRange::new(Money::from_rupees(1000), Some(Money::from_rupees(2000))),
            ),
            ("Above ₹2000", PriceRange::new(Money::from_rupees(2000), None)),
        ]
    }
}

/// Parses the dropdown values: `"0-500"` (bounded) or `"2000"` (open ended),
/// both in whole rupees. A max of `0` means no upper bound.
impl FromStr for PriceRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || CoreError::InvalidPriceRange(s.to_string());
        let parse = |part: &str| part.trim().parse::<u32>().map_err(|_| invalid());

        let range = match s.split_once('-') {
            Some((min, max)) => {
                let min = parse(min)?;
                let max = parse(max)?;
                let max = (max != 0).then(|| Money::from_rupees(i64::from(max)));
                PriceRange::new(Money::from_rupees(i64::from(min)), max)
            }
            None => PriceRange::new(Money::from_rupees(i64::from(parse(s)?)), None),
        };

        if range.max.is_some_and(|max| max < range.min) {
            return Err(invalid());
        }
        Ok(range)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min.rupees(), max.rupees()),
            None => write!(f, "{}", self.min.rupees()),
        }
    }
}

// =============================================================================
// Product Filter
// =============================================================================

/// Catalog browsing filter. The default filter matches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProductFilter {
    /// Case-insensitive substring of name or description.
    pub search: String,
    /// Exact category; `None` matches all.
    pub category: Option<String>,
    pub price_range: Option<PriceRange>,
}

impl ProductFilter {
    /// Builds a filter from the raw control values of the products page.
    /// Empty strings mean "no constraint". The search text is kept as typed.
    pub fn from_controls(search: &str, category: &str, price_range: &str) -> CoreResult<Self> {
        let search = search.to_string();
        let category = (!category.trim().is_empty()).then(|| category.trim().to_string());
        let price_range = if price_range.trim().is_empty() {
            None
        } else {
            Some(price_range.parse()?)
        };

        Ok(ProductFilter {
            search,
            category,
            price_range,
        })
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self
                .category
                .as_deref()
                .map_or(true, |category| category.is_empty() || product.category == category)
            && self
                .price_range
                .map_or(true, |range| range.contains(product.price))
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    /// Applies the filter, preserving catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

// =============================================================================
// Derived Views
// =============================================================================

/// Distinct categories in order of first appearance.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories.iter().any(|c| *c == product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

/// The first `limit` featured products, in catalog order.
pub fn featured_products(products: &[Product], limit: usize) -> Vec<&Product> {
    products.iter().filter(|p| p.featured).take(limit).collect()
}

/// Numbers on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogStats {
    pub total_products: usize,
    pub featured_products: usize,
    /// Sum of unit prices across the catalog.
    pub total_value: Money,
    pub categories: usize,
}

impl CatalogStats {
    pub fn from_products(products: &[Product]) -> Self {
        CatalogStats {
            total_products: products.len(),
            featured_products: products.iter().filter(|p| p.featured).count(),
            total_value: products.iter().map(|p| p.price).sum(),
            categories: distinct_categories(products).len(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
