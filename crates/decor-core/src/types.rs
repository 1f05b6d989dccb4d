//! # Domain Types
//!
//! Core domain types shared by the stores and the presentation layer.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │   AboutInfo     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (timestamp) │◄──│  product (copy) │   │  companyName    │       │
//! │  │  name, price    │   │  quantity (>0)  │   │  contact info   │       │
//! │  │  images         │   └─────────────────┘   │  specialties[]  │       │
//! │  │  category       │                         └─────────────────┘       │
//! │  │  featured       │                                                    │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Inputs:  NewProduct (add), ProductPatch / AboutInfoPatch (update)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Every type serializes with camelCase field names (`createdAt`,
//! `companyName`, `workingHours`), the shape stored in the persisted
//! snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product listed in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier, generated from the creation timestamp.
    /// Immutable after creation.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Long description shown on the detail page.
    pub description: String,

    /// Price in paise.
    pub price: Money,

    /// Image URLs or `data:image/...` URLs, first one is the thumbnail.
    pub images: Vec<String>,

    /// Free-text category ("Idols", "Garlands", ...).
    pub category: String,

    /// Free-text seller name.
    pub seller: String,

    /// When the product was added to the catalog.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Shown on the home page and badged in listings.
    pub featured: bool,
}

impl Product {
    /// Builds a product from creation input plus the generated identity.
    pub fn from_new(id: impl Into<String>, created_at: DateTime<Utc>, data: NewProduct) -> Self {
        Product {
            id: id.into(),
            name: data.name,
            description: data.description,
            price: data.price,
            images: data.images,
            category: data.category,
            seller: data.seller,
            created_at,
            featured: data.featured,
        }
    }

    /// Applies a partial update. `id` and `created_at` are not patchable.
    pub fn apply(&mut self, patch: ProductPatch) {
        let ProductPatch {
            name,
            description,
            price,
            images,
            category,
            seller,
            featured,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(images) = images {
            self.images = images;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(seller) = seller {
            self.seller = seller;
        }
        if let Some(featured) = featured {
            self.featured = featured;
        }
    }

    /// First image, used as the listing thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// The crossed-out "was" price on the detail page: price × 1.2, rounded
    /// to whole rupees.
    pub fn compare_at_price(&self) -> Money {
        self.price.scale_to_whole_rupees(6, 5)
    }
}

/// Input for creating a product: a [`Product`] without `id` / `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub images: Vec<String>,
    pub category: String,
    pub seller: String,
    pub featured: bool,
}

/// Partial update for a product. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub seller: Option<String>,
    pub featured: Option<bool>,
}

impl ProductPatch {
    /// Patch that only sets the featured flag.
    pub fn featured(featured: bool) -> Self {
        ProductPatch {
            featured: Some(featured),
            ..Default::default()
        }
    }

    /// Patch that only sets the price.
    pub fn price(price: Money) -> Self {
        ProductPatch {
            price: Some(price),
            ..Default::default()
        }
    }

    /// True when applying this patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == ProductPatch::default()
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One distinct product in the cart.
///
/// ## Snapshot Pattern
/// `product` is a full copy taken when the line was created, so later
/// catalog edits (price, name) do not change what is in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Product copy at time of adding (frozen).
    pub product: Product,

    /// Always greater than zero while the line is in a cart.
    pub quantity: u32,
}

impl CartLine {
    /// Creates a line from a product and quantity.
    pub fn new(product: &Product, quantity: u32) -> Self {
        CartLine {
            product: product.clone(),
            quantity,
        }
    }

    /// Product id this line is keyed by.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

// =============================================================================
// About Info
// =============================================================================

/// Placeholder text for a specialty added from the admin form.
pub const NEW_SPECIALTY_PLACEHOLDER: &str = "Enter new specialty here";

/// Company metadata shown on the About page. Exactly one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AboutInfo {
    pub company_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub description: String,
    pub working_hours: String,
    /// Display order is insertion order.
    pub specialties: Vec<String>,
    pub experience: String,
}

impl AboutInfo {
    /// Shallow-merges a patch into this record.
    pub fn apply(&mut self, patch: AboutInfoPatch) {
        let AboutInfoPatch {
            company_name,
            address,
            phone,
            email,
            description,
            working_hours,
            specialties,
            experience,
        } = patch;

        if let Some(v) = company_name {
            self.company_name = v;
        }
        if let Some(v) = address {
            self.address = v;
        }
        if let Some(v) = phone {
            self.phone = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = working_hours {
            self.working_hours = v;
        }
        if let Some(v) = specialties {
            self.specialties = v;
        }
        if let Some(v) = experience {
            self.experience = v;
        }
    }

    /// Replaces the specialty at `index`. Returns `false` if out of range.
    pub fn set_specialty(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.specialties.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Appends a specialty; `None` appends the placeholder text.
    pub fn push_specialty(&mut self, value: Option<String>) {
        self.specialties
            .push(value.unwrap_or_else(|| NEW_SPECIALTY_PLACEHOLDER.to_string()));
    }

    /// Removes the specialty at `index`.
    ///
    /// The last remaining specialty cannot be removed; returns `false` in
    /// that case or when `index` is out of range.
    pub fn remove_specialty(&mut self, index: usize) -> bool {
        if self.specialties.len() <= 1 || index >= self.specialties.len() {
            return false;
        }
        self.specialties.remove(index);
        true
    }
}

/// Partial update for [`AboutInfo`]. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct AboutInfoPatch {
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub working_hours: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub experience: Option<String>,
}

/// A full record as a patch: the admin form submits every field at once.
impl From<AboutInfo> for AboutInfoPatch {
    fn from(info: AboutInfo) -> Self {
        AboutInfoPatch {
            company_name: Some(info.company_name),
            address: Some(info.address),
            phone: Some(info.phone),
            email: Some(info.email),
            description: Some(info.description),
            working_hours: Some(info.working_hours),
            specialties: Some(info.specialties),
            experience: Some(info.experience),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "1".to_string(),
            name: "Premium Ganpati Idol - Large".to_string(),
            description: "Handcrafted idol".to_string(),
            price: Money::from_rupees(2500),
            images: vec!["https://example.com/idol.jpeg".to_string()],
            category: "Idols".to_string(),
            seller: "Sacred Arts".to_string(),
            created_at: Utc::now(),
            featured: true,
        }
    }

    fn sample_about() -> AboutInfo {
        AboutInfo {
            company_name: "K.D. Arts".to_string(),
            address: "addr".to_string(),
            phone: "phone".to_string(),
            email: "email".to_string(),
            description: "desc".to_string(),
            working_hours: "hours".to_string(),
            specialties: vec!["Idols".to_string(), "Garlands".to_string()],
            experience: "10 years".to_string(),
        }
    }

    #[test]
    fn test_product_patch_merges_only_set_fields() {
        let mut product = sample_product();
        let original = product.clone();

        product.apply(ProductPatch {
            name: Some("Idol - Medium".to_string()),
            price: Some(Money::from_rupees(1800)),
            ..Default::default()
        });

        assert_eq!(product.name, "Idol - Medium");
        assert_eq!(product.price, Money::from_rupees(1800));
        assert_eq!(product.id, original.id);
        assert_eq!(product.created_at, original.created_at);
        assert_eq!(product.category, original.category);
        assert!(product.featured);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut product = sample_product();
        let original = product.clone();
        let patch = ProductPatch::default();
        assert!(patch.is_empty());

        product.apply(patch);
        assert_eq!(product, original);
        assert!(!ProductPatch::featured(false).is_empty());
    }

    #[test]
    fn test_compare_at_price() {
        let product = sample_product();
        assert_eq!(product.compare_at_price(), Money::from_rupees(3000));
        assert_eq!(product.thumbnail(), Some("https://example.com/idol.jpeg"));
    }

    #[test]
    fn test_cart_line_total() {
        let line = CartLine::new(&sample_product(), 3);
        assert_eq!(line.product_id(), "1");
        assert_eq!(line.line_total(), Money::from_rupees(7500));
    }

    #[test]
    fn test_product_wire_format_is_camel_case() {
        let json = serde_json::to_value(sample_product()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["price"], 2500);

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, "1");
    }

    #[test]
    fn test_patch_deserializes_from_partial_json() {
        let patch: ProductPatch = serde_json::from_str(r#"{"featured": false}"#).unwrap();
        assert_eq!(patch, ProductPatch::featured(false));

        let patch: AboutInfoPatch = serde_json::from_str(r#"{"workingHours": "9-5"}"#).unwrap();
        assert_eq!(patch.working_hours.as_deref(), Some("9-5"));
        assert!(patch.company_name.is_none());
    }

    #[test]
    fn test_about_patch_shallow_merge() {
        let mut info = sample_about();
        info.apply(AboutInfoPatch {
            phone: Some("+91 98765 43210".to_string()),
            specialties: Some(vec!["Rangoli".to_string()]),
            ..Default::default()
        });

        assert_eq!(info.phone, "+91 98765 43210");
        assert_eq!(info.specialties, vec!["Rangoli".to_string()]);
        assert_eq!(info.company_name, "K.D. Arts");
    }

    #[test]
    fn test_full_record_patch_overwrites_everything() {
        let mut info = sample_about();
        let mut replacement = sample_about();
        replacement.company_name = "New Name".to_string();
        replacement.specialties.clear();

        info.apply(replacement.clone().into());
        assert_eq!(info, replacement);
    }

    #[test]
    fn test_specialty_editing() {
        let mut info = sample_about();

        assert!(info.set_specialty(1, "Marigold Garlands"));
        assert!(!info.set_specialty(5, "nope"));
        assert_eq!(info.specialties[1], "Marigold Garlands");

        info.push_specialty(None);
        assert_eq!(info.specialties[2], NEW_SPECIALTY_PLACEHOLDER);

        assert!(info.remove_specialty(0));
        assert!(info.remove_specialty(0));
        assert_eq!(info.specialties, vec![NEW_SPECIALTY_PLACEHOLDER.to_string()]);

        // The last specialty stays
        assert!(!info.remove_specialty(0));
        assert_eq!(info.specialties.len(), 1);
    }
}
