//! The compile-time product list.
//!
//! Pre-order items live only here until the storefront starts carrying them.
//! Entries that already carry a `shopify_variant_id` are claimed by the live
//! feed and only serve as fallbacks for catalog-disabled deployments.

use bantu_ants_core::{DisplayPrice, ProductId, VariantId};

use super::Product;

/// The static product list, in display order.
#[must_use]
pub fn static_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("pack-01"),
            name: "Nomad Travel Backpack".to_string(),
            price: DisplayPrice::new("$280"),
            category: "Relic_Gear".to_string(),
            lore: "Premium embossed leather backpack with \"Bantu Ants Travel Club\" \
                   insignia. Water-resistant, multi-compartment design. Support the \
                   movement. Pre-order ships Q2 2026."
                .to_string(),
            image: "/bagpackbat.png".to_string(),
            images: vec!["/bagpackbat.png".to_string(), "/bagad.png".to_string()],
            tags: vec![
                "Pre-Order".to_string(),
                "Q2 2026".to_string(),
                "Unisex".to_string(),
            ],
            variants: Vec::new(),
            shopify_variant_id: None,
            shopify_product_id: None,
        },
        Product {
            id: ProductId::new("tee-01"),
            name: "Boma Ye – Unisex T-Shirt".to_string(),
            price: DisplayPrice::new("$39.99"),
            category: "Apparel".to_string(),
            lore: "The Ali Boma Ye (\"Ali, kill him!\") tee pays tribute to Muhammad \
                   Ali's 1974 \"Rumble in the Jungle,\" reclaiming African pride and \
                   power through iconic design."
                .to_string(),
            image: super::PLACEHOLDER_IMAGE.to_string(),
            images: Vec::new(),
            tags: vec![
                "Available Now".to_string(),
                "Unisex".to_string(),
                "Black".to_string(),
            ],
            variants: Vec::new(),
            shopify_variant_id: Some(VariantId::new("gid://shopify/ProductVariant/50848331989288")),
            shopify_product_id: Some("gid://shopify/Product/9857413284136".to_string()),
        },
    ]
}
