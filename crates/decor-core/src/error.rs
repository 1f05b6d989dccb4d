//! # Error Types
//!
//! Domain-specific error types for decor-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  decor-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Admin form input failures                      │
//! │                                                                         │
//! │  decor-store errors (separate crate)                                   │
//! │  └── StoreError       - Storage, snapshot and config failures          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → shown next to the form field      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field or value in the message
//! 3. Errors are enum variants, never String
//! 4. Lookup misses are NOT errors: stores report them as `None` / `false`

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A price range string from the catalog filter could not be parsed.
    ///
    /// ## When This Occurs
    /// - `"abc"` or `"500-"` passed to `PriceRange::from_str`
    /// - min greater than max (`"1000-500"`)
    #[error("Invalid price range: '{0}'")]
    InvalidPriceRange(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised only at the UI boundary (the admin upload form). The stores
/// themselves never validate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value is below the allowed minimum.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: String },

    /// Invalid format (e.g., non-numeric price, unsupported image source).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
