//! Product catalog: domain types and static/dynamic aggregation.
//!
//! The catalog shown to shoppers merges two sources:
//! - a compile-time static list ([`static_products`]) holding pre-order items
//!   that the storefront does not carry yet, and
//! - the live product feed fetched from the storefront collaborator.
//!
//! Static entries that carry an external variant reference are placeholders
//! for products the live feed also returns; [`aggregate`] drops them so a
//! product never appears twice.

mod static_products;

pub use static_products::static_products;

use bantu_ants_core::{DisplayPrice, ProductId, VariantId};
use serde::{Deserialize, Serialize};

/// Image URL shown when a live product has no images of its own.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?auto=format&fit=crop&q=80&w=800";

/// Category assigned to live products (the feed does not supply one).
pub const DEFAULT_CATEGORY: &str = "Apparel";

/// Tag marking a product as currently purchasable.
pub const TAG_AVAILABLE_NOW: &str = "Available Now";

/// A purchasable sub-option of a product (e.g. size or color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Variant ID, unique within its product.
    pub id: VariantId,
    /// Display title (e.g. "Black / L").
    pub title: String,
    /// Formatted price; may differ from the product base price.
    pub price: DisplayPrice,
    /// Whether this variant is available for sale.
    pub available: bool,
    /// Variant-specific image URL.
    pub image: Option<String>,
}

/// A product in the aggregated catalog.
///
/// A product with an empty `variants` list is treated as a single implicit
/// variant equal to the product itself; checkout resolution falls back to
/// `shopify_variant_id` in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Stable ID, unique across both static and live sources.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Formatted base price.
    pub price: DisplayPrice,
    /// Display category.
    pub category: String,
    /// Narrative product description.
    pub lore: String,
    /// Primary image URL.
    pub image: String,
    /// All image URLs, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Display tags (e.g. "Pre-Order", "Available Now").
    #[serde(default)]
    pub tags: Vec<String>,
    /// Declared variants; empty for single-variant products.
    #[serde(default)]
    pub variants: Vec<Variant>,
    /// Default external variant reference used for checkout handoff.
    pub shopify_variant_id: Option<VariantId>,
    /// External product reference, kept for checkout diagnostics.
    pub shopify_product_id: Option<String>,
}

impl Product {
    /// Find a declared variant by id.
    #[must_use]
    pub fn variant(&self, id: &VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| &v.id == id)
    }
}

/// Merge the static product list with the live feed into one catalog.
///
/// Static entries WITHOUT an external variant reference are local-only
/// products (e.g. a pre-order not yet backed by the storefront) and are kept,
/// in order, ahead of every live entry. Static entries WITH a reference are
/// superseded by the live fetch and dropped to avoid duplication.
#[must_use]
pub fn aggregate(static_list: Vec<Product>, dynamic: Vec<Product>) -> Vec<Product> {
    static_list
        .into_iter()
        .filter(|p| p.shopify_variant_id.is_none())
        .chain(dynamic)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, shopify_variant_id: Option<&str>) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: DisplayPrice::new("$10.00"),
            category: DEFAULT_CATEGORY.to_string(),
            lore: String::new(),
            image: PLACEHOLDER_IMAGE.to_string(),
            images: Vec::new(),
            tags: Vec::new(),
            variants: Vec::new(),
            shopify_variant_id: shopify_variant_id.map(VariantId::new),
            shopify_product_id: None,
        }
    }

    #[test]
    fn test_aggregate_keeps_local_only_static_entries() {
        let static_list = vec![product("pack-01", None)];
        let merged = aggregate(static_list, Vec::new());

        assert_eq!(merged.len(), 1);
        assert_eq!(merged.first().map(|p| p.id.as_str()), Some("pack-01"));
    }

    #[test]
    fn test_aggregate_drops_storefront_claimed_static_entries() {
        let static_list = vec![
            product("pack-01", None),
            product("tee-01", Some("gid://shopify/ProductVariant/1")),
        ];
        let dynamic = vec![product("gid://shopify/Product/1", None)];
        let merged = aggregate(static_list, dynamic);

        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|p| p.id.as_str() != "tee-01"));
    }

    #[test]
    fn test_aggregate_preserves_order_static_first() {
        let static_list = vec![product("pack-01", None), product("map-01", None)];
        let dynamic = vec![product("live-1", None), product("live-2", None)];
        let merged = aggregate(static_list, dynamic);

        let ids: Vec<&str> = merged.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["pack-01", "map-01", "live-1", "live-2"]);
    }

    #[test]
    fn test_variant_lookup() {
        let mut p = product("tee-01", None);
        p.variants = vec![Variant {
            id: VariantId::new("v1"),
            title: "Black / M".to_string(),
            price: DisplayPrice::new("$39.99"),
            available: true,
            image: None,
        }];

        assert!(p.variant(&VariantId::new("v1")).is_some());
        assert!(p.variant(&VariantId::new("v2")).is_none());
    }
}
