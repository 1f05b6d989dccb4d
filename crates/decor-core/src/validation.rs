//! # Validation Module
//!
//! Input validation for the admin upload form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form controls (presentation layer)                           │
//! │  ├── required fields, numeric price input                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── ProductForm → NewProduct                                          │
//! │  └── price parsing, image presence                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Stores                                                       │
//! │  └── NO validation: whatever reaches a store is stored                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use decor_core::validation::{validate_product_form, ProductForm};
//!
//! let form = ProductForm {
//!     name: "Brass Diya Set".into(),
//!     description: "Set of 12 diyas".into(),
//!     price: "800".into(),
//!     category: "Lighting".into(),
//!     seller: "Heritage Crafts".into(),
//!     featured: false,
//!     images: vec!["https://example.com/diya.jpeg".into()],
//! };
//! let product = validate_product_form(&form).unwrap();
//! assert_eq!(product.price.rupees(), 800);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::NewProduct;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Lowest price the upload form accepts.
pub const MIN_PRODUCT_PRICE: Money = Money::from_rupees(1);

/// Maximum length of a product name.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// Product Upload Form
// =============================================================================

/// Raw values from the admin "upload product" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    /// Price exactly as typed, in rupees.
    pub price: String,
    pub category: String,
    pub seller: String,
    pub featured: bool,
    /// Uploaded images as data URLs, or remote URLs.
    pub images: Vec<String>,
}

/// Validates the upload form and converts it to store input.
///
/// ## Rules
/// - name, description, category and seller are required (trimmed)
/// - price parses as rupees with at most two decimals and is at least ₹1
/// - at least one image, each an `http(s)://` URL or `data:image/` URL
///
/// The first failing rule is reported.
pub fn validate_product_form(form: &ProductForm) -> ValidationResult<NewProduct> {
    let name = required("name", &form.name)?;
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    let price = validate_price(&form.price)?;
    let category = required("category", &form.category)?;
    let seller = required("seller", &form.seller)?;
    let description = required("description", &form.description)?;

    if form.images.is_empty() {
        return Err(ValidationError::Required {
            field: "images".to_string(),
        });
    }
    for image in &form.images {
        validate_image_source(image)?;
    }

    Ok(NewProduct {
        name,
        description,
        price,
        images: form.images.clone(),
        category,
        seller,
        featured: form.featured,
    })
}

/// Parses a typed price and enforces the form minimum.
pub fn validate_price(input: &str) -> ValidationResult<Money> {
    let price = Money::parse_rupees(input)?;
    if price < MIN_PRODUCT_PRICE {
        return Err(ValidationError::BelowMinimum {
            field: "price".to_string(),
            min: MIN_PRODUCT_PRICE.to_string(),
        });
    }
    Ok(price)
}

/// Accepts remote image URLs and image data URLs produced by the file picker.
pub fn validate_image_source(src: &str) -> ValidationResult<()> {
    let src = src.trim();
    let ok = src.starts_with("https://")
        || src.starts_with("http://")
        || src.starts_with("data:image/");

    if ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat {
            field: "images".to_string(),
            reason: "must be an http(s) URL or an image data URL".to_string(),
        })
    }
}

fn required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "  Decorative Marigold Garland ".to_string(),
            description: "Fresh marigold garlands".to_string(),
            price: "150".to_string(),
            category: "Garlands".to_string(),
            seller: "Flower Paradise".to_string(),
            featured: true,
            images: vec!["data:image/png;base64,iVBORw0KGgo=".to_string()],
        }
    }

    #[test]
    fn test_valid_form_converts() {
        let product = validate_product_form(&valid_form()).unwrap();
        assert_eq!(product.name, "Decorative Marigold Garland");
        assert_eq!(product.price, Money::from_rupees(150));
        assert!(product.featured);
        assert_eq!(product.images.len(), 1);
    }

    #[test]
    fn test_missing_images_rejected() {
        let mut form = valid_form();
        form.images.clear();
        assert_eq!(
            validate_product_form(&form),
            Err(ValidationError::Required {
                field: "images".to_string()
            })
        );
    }

    #[test]
    fn test_required_fields() {
        for field in ["name", "category", "seller", "description"] {
            let mut form = valid_form();
            match field {
                "name" => form.name = "   ".to_string(),
                "category" => form.category.clear(),
                "seller" => form.seller.clear(),
                _ => form.description.clear(),
            }
            assert_eq!(
                validate_product_form(&form),
                Err(ValidationError::Required {
                    field: field.to_string()
                })
            );
        }
    }

    #[test]
    fn test_price_rules() {
        assert_eq!(validate_price("1").unwrap(), Money::from_rupees(1));
        assert_eq!(validate_price("99.99").unwrap().paise(), 9999);
        assert!(matches!(
            validate_price("0.50"),
            Err(ValidationError::BelowMinimum { .. })
        ));
        assert!(matches!(
            validate_price("twelve"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_image_sources() {
        assert!(validate_image_source("https://images.pexels.com/photos/1.jpeg").is_ok());
        assert!(validate_image_source("data:image/jpeg;base64,/9j/4AAQ").is_ok());
        assert!(validate_image_source("data:text/plain;base64,aGk=").is_err());
        assert!(validate_image_source("file:///etc/passwd").is_err());
    }

    #[test]
    fn test_name_too_long() {
        let mut form = valid_form();
        form.name = "A".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            validate_product_form(&form),
            Err(ValidationError::TooLong { .. })
        ));
    }
}
