//! # decor-core: Pure Domain Logic for the Decorations Storefront
//!
//! This crate contains the storefront's domain types and every computation
//! the pages derive from store state, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation layer                           │   │
//! │  │   Home ──► Products ──► Detail ──► Cart      Backend (admin)    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ store operations                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        decor-store: ProductStore, CartStore, AboutInfoStore     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ decor-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  filters  │  │  upload   │  │   │
//! │  │   │ CartLine  │  │  (paise)  │  │  stats    │  │   form    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, CartLine, AboutInfo and their patch types
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Browsing filters, featured selection, dashboard stats
//! - [`validation`] - Admin upload form validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use decor_core::catalog::ProductFilter;
//! use decor_core::money::Money;
//!
//! let filter = ProductFilter::from_controls("idol", "", "2000").unwrap();
//! assert_eq!(filter.price_range.unwrap().min, Money::from_rupees(2000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CatalogStats, PriceRange, ProductFilter};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
