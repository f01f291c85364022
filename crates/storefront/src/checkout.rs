//! Checkout handoff to the external storefront.
//!
//! Cart lines are translated into (variant id, quantity) pairs and joined
//! into a path-based storefront cart URL
//! (`https://<store>/cart/<id>:<qty>,<id>:<qty>`). Lines without a
//! resolvable external variant id are dropped from the request instead of
//! being sent as invalid input; the routes layer surfaces "no valid
//! products" when everything drops. Nothing in here can fail the cart
//! itself: the worst outcome is `None`, which the shopper can retry.

use bantu_ants_core::VariantId;
use serde::Serialize;

use crate::cart::CartLine;

/// A (variant id, quantity) pair understood by the storefront cart URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutLineItem {
    /// External variant id, possibly in `gid://` form.
    pub variant_id: VariantId,
    /// Units to pre-populate.
    pub quantity: u32,
}

/// Derive checkout line items from cart lines.
///
/// Each line resolves its variant id as the selected variant's id, falling
/// back to the product's default external variant reference. Lines that
/// resolve to neither are excluded. An empty result is a value, not an
/// error.
#[must_use]
pub fn build_line_items(lines: &[CartLine]) -> Vec<CheckoutLineItem> {
    lines
        .iter()
        .filter_map(|line| {
            let variant_id = line
                .selected_variant
                .as_ref()
                .map(|v| v.id.clone())
                .or_else(|| line.product.shopify_variant_id.clone())?;
            Some(CheckoutLineItem {
                variant_id,
                quantity: line.quantity,
            })
        })
        .collect()
}

/// Build the storefront cart URL for the given line items.
///
/// Returns `None` when the storefront domain is not configured or no line
/// item yields a usable id, so the caller can surface a recoverable
/// "checkout unavailable" state instead of navigating to an empty cart.
#[must_use]
pub fn checkout_url(store_domain: Option<&str>, items: &[CheckoutLineItem]) -> Option<String> {
    let domain = store_domain.filter(|d| !d.trim().is_empty())?;

    let parts: Vec<String> = items
        .iter()
        .filter_map(|item| {
            let numeric = numeric_id(item.variant_id.as_str())?;
            Some(format!("{numeric}:{}", item.quantity))
        })
        .collect();

    if parts.is_empty() {
        return None;
    }

    Some(format!("https://{domain}/cart/{}", parts.join(",")))
}

/// Extract the trailing opaque segment from a namespaced identifier.
///
/// The storefront hands back gid-style ids
/// (`gid://shopify/ProductVariant/50848331989288`); only the trailing
/// segment goes into the cart URL. Ids without a `/` are used as-is.
fn numeric_id(id: &str) -> Option<&str> {
    let tail = id.rsplit('/').next().unwrap_or(id);
    if tail.is_empty() { None } else { Some(tail) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::{Product, Variant};
    use bantu_ants_core::{DisplayPrice, ProductId};

    fn product(id: &str, shopify_variant_id: Option<&str>) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: DisplayPrice::new("$10.00"),
            category: "Apparel".to_string(),
            lore: String::new(),
            image: String::new(),
            images: Vec::new(),
            tags: Vec::new(),
            variants: Vec::new(),
            shopify_variant_id: shopify_variant_id.map(VariantId::new),
            shopify_product_id: None,
        }
    }

    fn variant(id: &str) -> Variant {
        Variant {
            id: VariantId::new(id),
            title: "Default".to_string(),
            price: DisplayPrice::new("$10.00"),
            available: true,
            image: None,
        }
    }

    #[test]
    fn test_build_line_items_drops_unresolvable_lines() {
        let mut cart = Cart::new();
        cart.add_item(
            product("tee-01", Some("gid://shopify/ProductVariant/111")),
            2,
            None,
        );
        cart.add_item(product("pack-01", None), 1, None);

        let items = build_line_items(cart.lines());

        assert_eq!(items.len(), 1);
        assert_eq!(
            items.first().map(|i| i.variant_id.as_str()),
            Some("gid://shopify/ProductVariant/111")
        );
    }

    #[test]
    fn test_selected_variant_wins_over_product_default() {
        let mut cart = Cart::new();
        cart.add_item(
            product("tee-01", Some("gid://shopify/ProductVariant/111")),
            1,
            Some(variant("gid://shopify/ProductVariant/222")),
        );

        let items = build_line_items(cart.lines());

        assert_eq!(
            items.first().map(|i| i.variant_id.as_str()),
            Some("gid://shopify/ProductVariant/222")
        );
    }

    #[test]
    fn test_checkout_url_joins_id_quantity_pairs() {
        let items = vec![
            CheckoutLineItem {
                variant_id: VariantId::new("gid://shopify/ProductVariant/111"),
                quantity: 2,
            },
            CheckoutLineItem {
                variant_id: VariantId::new("333"),
                quantity: 1,
            },
        ];

        let url = checkout_url(Some("bantu-ants.myshopify.com"), &items);

        assert_eq!(
            url.as_deref(),
            Some("https://bantu-ants.myshopify.com/cart/111:2,333:1")
        );
    }

    #[test]
    fn test_checkout_url_none_for_empty_items() {
        assert_eq!(checkout_url(Some("bantu-ants.myshopify.com"), &[]), None);
    }

    #[test]
    fn test_checkout_url_none_without_domain() {
        let items = vec![CheckoutLineItem {
            variant_id: VariantId::new("111"),
            quantity: 1,
        }];

        assert_eq!(checkout_url(None, &items), None);
        assert_eq!(checkout_url(Some(""), &items), None);
    }

    #[test]
    fn test_numeric_id_extraction() {
        assert_eq!(
            numeric_id("gid://shopify/ProductVariant/50848331989288"),
            Some("50848331989288")
        );
        assert_eq!(numeric_id("50848331989288"), Some("50848331989288"));
        assert_eq!(numeric_id("gid://shopify/ProductVariant/"), None);
    }
}
