//! Wire types for the storefront products feed.
//!
//! The feed is the JSON shape of a Shopify products connection: an array of
//! edges, each wrapping a `node` with nested image and variant connections.
//! These types mirror that shape exactly; the clean catalog types live in
//! [`crate::catalog`] and are produced by [`super::conversions`].

use serde::Deserialize;

/// One element of the top-level products array.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteProductEdge {
    pub node: RemoteProduct,
}

/// A product as the feed returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteProduct {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub handle: String,
    #[serde(default)]
    pub images: RemoteConnection<RemoteImage>,
    #[serde(default)]
    pub variants: RemoteConnection<RemoteVariant>,
}

/// A GraphQL-style edge connection (`{ "edges": [{ "node": ... }] }`).
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConnection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<RemoteEdge<T>>,
}

impl<T> Default for RemoteConnection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

/// An edge wrapping a single node.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEdge<T> {
    pub node: T,
}

/// A product image.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteImage {
    pub src: String,
    #[serde(default, rename = "altText")]
    pub alt_text: Option<String>,
}

/// A product variant.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteVariant {
    pub id: String,
    pub title: String,
    /// Plain decimal amount string; absent means the feed had no price.
    #[serde(default)]
    pub price: Option<String>,
    /// Availability flag; the feed omits it for purchasable variants.
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub image: Option<RemoteImage>,
}

const fn default_available() -> bool {
    true
}
