//! Conversion from feed wire types to catalog types.

use bantu_ants_core::{DisplayPrice, ProductId, VariantId};

use crate::catalog::{DEFAULT_CATEGORY, PLACEHOLDER_IMAGE, Product, TAG_AVAILABLE_NOW, Variant};

use super::types::{RemoteProduct, RemoteVariant};

/// Fallback description for feed products without one.
const DEFAULT_LORE: &str = "Premium Bantu Ants apparel.";

/// Map a feed product into the catalog model.
///
/// The first image becomes the primary image (placeholder when the feed has
/// none), the first variant supplies the base display price ("$0" for
/// variant-less products) and the default external variant reference, and
/// the fixed category/tag are synthesized since the feed carries neither.
pub fn convert_product(remote: RemoteProduct) -> Product {
    let images: Vec<String> = remote.images.edges.into_iter().map(|e| e.node.src).collect();
    let image = images
        .first()
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let variants: Vec<Variant> = remote
        .variants
        .edges
        .into_iter()
        .map(|e| convert_variant(e.node))
        .collect();

    let price = variants
        .first()
        .map_or_else(DisplayPrice::zero, |v| v.price.clone());
    let shopify_variant_id = variants.first().map(|v| v.id.clone());

    Product {
        id: ProductId::new(remote.id.clone()),
        name: remote.title,
        price,
        category: DEFAULT_CATEGORY.to_string(),
        lore: remote
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_LORE.to_string()),
        image,
        images,
        tags: vec![TAG_AVAILABLE_NOW.to_string()],
        variants,
        shopify_variant_id,
        shopify_product_id: Some(remote.id),
    }
}

fn convert_variant(remote: RemoteVariant) -> Variant {
    let amount = remote.price.unwrap_or_else(|| "0".to_string());

    Variant {
        id: VariantId::new(remote.id),
        title: remote.title,
        price: DisplayPrice::new(format!("${amount}")),
        available: remote.available,
        image: remote.image.map(|i| i.src),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shopify::types::{RemoteConnection, RemoteEdge, RemoteImage};

    fn remote_product(images: Vec<&str>, variants: Vec<RemoteVariant>) -> RemoteProduct {
        RemoteProduct {
            id: "gid://shopify/Product/1".to_string(),
            title: "Boma Ye Tee".to_string(),
            description: Some("Tribute tee.".to_string()),
            handle: "boma-ye-tee".to_string(),
            images: RemoteConnection {
                edges: images
                    .into_iter()
                    .map(|src| RemoteEdge {
                        node: RemoteImage {
                            src: src.to_string(),
                            alt_text: None,
                        },
                    })
                    .collect(),
            },
            variants: RemoteConnection {
                edges: variants.into_iter().map(|node| RemoteEdge { node }).collect(),
            },
        }
    }

    fn remote_variant(id: &str, price: Option<&str>) -> RemoteVariant {
        RemoteVariant {
            id: id.to_string(),
            title: "Black / M".to_string(),
            price: price.map(String::from),
            available: true,
            image: None,
        }
    }

    #[test]
    fn test_first_image_becomes_primary() {
        let product = convert_product(remote_product(
            vec!["https://cdn.example.com/a.png", "https://cdn.example.com/b.png"],
            vec![remote_variant("v1", Some("39.99"))],
        ));

        assert_eq!(product.image, "https://cdn.example.com/a.png");
        assert_eq!(product.images.len(), 2);
    }

    #[test]
    fn test_missing_images_fall_back_to_placeholder() {
        let product = convert_product(remote_product(
            Vec::new(),
            vec![remote_variant("v1", Some("39.99"))],
        ));

        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_price_comes_from_first_variant() {
        let product = convert_product(remote_product(
            Vec::new(),
            vec![
                remote_variant("v1", Some("39.99")),
                remote_variant("v2", Some("44.99")),
            ],
        ));

        assert_eq!(product.price.as_str(), "$39.99");
        assert_eq!(
            product.shopify_variant_id.as_ref().map(|v| v.as_str()),
            Some("v1")
        );
    }

    #[test]
    fn test_zero_variants_yield_zero_display_price() {
        let product = convert_product(remote_product(Vec::new(), Vec::new()));

        assert_eq!(product.price.as_str(), "$0");
        assert!(product.shopify_variant_id.is_none());
        assert!(product.variants.is_empty());
    }

    #[test]
    fn test_category_and_tags_are_synthesized() {
        let product = convert_product(remote_product(Vec::new(), Vec::new()));

        assert_eq!(product.category, DEFAULT_CATEGORY);
        assert_eq!(product.tags, vec![TAG_AVAILABLE_NOW.to_string()]);
    }

    #[test]
    fn test_empty_description_falls_back() {
        let mut remote = remote_product(Vec::new(), Vec::new());
        remote.description = Some(String::new());

        assert_eq!(convert_product(remote).lore, DEFAULT_LORE);
    }

    #[test]
    fn test_variant_price_formatted_with_symbol() {
        let product = convert_product(remote_product(
            Vec::new(),
            vec![remote_variant("v1", None)],
        ));

        let first = product.variants.first().expect("variant present");
        assert_eq!(first.price.as_str(), "$0");
    }
}
