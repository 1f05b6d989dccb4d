//! # Default Data
//!
//! What a store starts with when nothing usable is persisted under its key.
//! Also what the `seed` binary writes.

use chrono::{DateTime, Utc};
use decor_core::{AboutInfo, Money, NewProduct, Product};

/// (id, name, description, rupees, image, category, seller, featured)
type DefaultProductRow = (
    &'static str,
    &'static str,
    &'static str,
    i64,
    &'static str,
    &'static str,
    &'static str,
    bool,
);

const DEFAULT_PRODUCTS: &[DefaultProductRow] = &[
    (
        "1",
        "Premium Ganpati Idol - Large",
        "Beautiful handcrafted Ganpati idol made with eco-friendly materials. Perfect for home decoration during Ganesh Chaturthi.",
        2500,
        "https://images.pexels.com/photos/9324344/pexels-photo-9324344.jpeg",
        "Idols",
        "Sacred Arts",
        true,
    ),
    (
        "2",
        "Decorative Marigold Garland",
        "Fresh marigold garlands handmade with premium flowers. Adds vibrant colors to your Ganpati decoration.",
        150,
        "https://images.pexels.com/photos/1615776/pexels-photo-1615776.jpeg",
        "Garlands",
        "Flower Paradise",
        true,
    ),
    (
        "3",
        "Traditional Brass Diya Set",
        "Set of 12 traditional brass diyas for creating a divine atmosphere during prayers and celebrations.",
        800,
        "https://images.pexels.com/photos/7207973/pexels-photo-7207973.jpeg",
        "Lighting",
        "Heritage Crafts",
        false,
    ),
    (
        "4",
        "Colorful Rangoli Powder Set",
        "Vibrant rangoli powder set with 8 different colors. Perfect for creating beautiful patterns around your Ganpati.",
        300,
        "https://images.pexels.com/photos/8844906/pexels-photo-8844906.jpeg",
        "Rangoli",
        "Color Magic",
        true,
    ),
];

/// The starter catalog, stamped with `created_at`.
pub fn default_products_at(created_at: DateTime<Utc>) -> Vec<Product> {
    DEFAULT_PRODUCTS
        .iter()
        .map(
            |&(id, name, description, rupees, image, category, seller, featured)| {
                Product::from_new(
                    id,
                    created_at,
                    NewProduct {
                        name: name.to_string(),
                        description: description.to_string(),
                        price: Money::from_rupees(rupees),
                        images: vec![image.to_string()],
                        category: category.to_string(),
                        seller: seller.to_string(),
                        featured,
                    },
                )
            },
        )
        .collect()
}

/// The starter catalog, created now.
pub fn default_products() -> Vec<Product> {
    default_products_at(Utc::now())
}

/// Placeholder company information, filled in from the admin panel.
pub fn default_about_info() -> AboutInfo {
    AboutInfo {
        company_name: "K.D. Arts".to_string(),
        address: "Enter address here".to_string(),
        phone: "Enter number here".to_string(),
        email: "Enter email here".to_string(),
        description: "Enter company description here".to_string(),
        working_hours: "Enter working hours here".to_string(),
        specialties: (1..=3)
            .map(|n| format!("Enter specialty {} here", n))
            .collect(),
        experience: "Enter years of experience here".to_string(),
    }
}
