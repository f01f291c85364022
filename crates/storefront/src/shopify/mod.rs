//! Storefront products feed client.
//!
//! # Architecture
//!
//! - Plain `reqwest` + `serde` against the JSON products feed (the feed is a
//!   proxy endpoint, not a GraphQL surface, so no query codegen is involved)
//! - The storefront is source of truth - NO local sync, direct API calls
//! - In-memory caching via `moka` for feed responses (5 minute TTL)
//! - One attempt per fetch; a failed fetch degrades to the static-only
//!   catalog rather than retrying

mod conversions;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::catalog::Product;
use crate::config::ShopifyConfig;
use conversions::convert_product;
use types::RemoteProductEdge;

/// Cache key for the (single) products feed response.
const PRODUCTS_CACHE_KEY: &str = "products";

/// Feed cache TTL.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Errors that can occur when talking to the storefront feed.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned a non-success status.
    #[error("Unexpected status {status} from products feed")]
    UnexpectedStatus { status: u16 },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the storefront products feed.
///
/// Cheaply cloneable; feed responses are cached for 5 minutes so a burst of
/// catalog requests costs one upstream round trip.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

struct StorefrontClientInner {
    client: reqwest::Client,
    products_url: String,
    cache: Cache<&'static str, Arc<Vec<Product>>>,
}

impl StorefrontClient {
    /// Create a new feed client, or `None` when no feed URL is configured.
    #[must_use]
    pub fn from_config(config: &ShopifyConfig) -> Option<Self> {
        config.products_url.as_ref().map(|url| Self::new(url))
    }

    /// Create a new feed client for the given products endpoint.
    #[must_use]
    pub fn new(products_url: &str) -> Self {
        let cache = Cache::builder().max_capacity(8).time_to_live(CACHE_TTL).build();

        Self {
            inner: Arc::new(StorefrontClientInner {
                client: reqwest::Client::new(),
                products_url: products_url.to_string(),
                cache,
            }),
        }
    }

    /// Fetch the live product list, mapped into catalog types.
    ///
    /// Single round trip; the response is cached for 5 minutes. The feed is
    /// queried with POST, matching the proxy contract.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable body. Callers treat every variant as recoverable and fall
    /// back to an empty live list.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ShopifyError> {
        if let Some(cached) = self.inner.cache.get(PRODUCTS_CACHE_KEY).await {
            debug!("Cache hit for products feed");
            return Ok(cached.as_ref().clone());
        }

        let response = self
            .inner
            .client
            .post(&self.inner.products_url)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShopifyError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        // Read the body as text first for better parse diagnostics
        let body = response.text().await?;
        let edges: Vec<RemoteProductEdge> = serde_json::from_str(&body).inspect_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse products feed response"
            );
        })?;

        let products: Vec<Product> = edges
            .into_iter()
            .map(|edge| convert_product(edge.node))
            .collect();

        self.inner
            .cache
            .insert(PRODUCTS_CACHE_KEY, Arc::new(products.clone()))
            .await;

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shopify_error_display() {
        let err = ShopifyError::UnexpectedStatus { status: 503 };
        assert_eq!(err.to_string(), "Unexpected status 503 from products feed");
    }

    #[test]
    fn test_from_config_requires_feed_url() {
        assert!(StorefrontClient::from_config(&ShopifyConfig::default()).is_none());

        let config = ShopifyConfig {
            store: None,
            products_url: Some("http://localhost:3001/api/shopify/products".to_string()),
        };
        assert!(StorefrontClient::from_config(&config).is_some());
    }
}
