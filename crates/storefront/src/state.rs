//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::services::SheetsClient;
use crate::shopify::StorefrontClient;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to shared
/// resources. The external clients are optional: a deployment without the
/// matching configuration simply runs with that feature degraded.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    storefront: Option<StorefrontClient>,
    sheets: Option<SheetsClient>,
}

impl AppState {
    /// Create the application state from configuration.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let storefront = StorefrontClient::from_config(&config.shopify);
        let sheets = SheetsClient::from_config(&config.sheets);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                storefront,
                sheets,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get the storefront feed client, if one is configured.
    #[must_use]
    pub fn storefront(&self) -> Option<&StorefrontClient> {
        self.inner.storefront.as_ref()
    }

    /// Get the spreadsheet form client, if one is configured.
    #[must_use]
    pub fn sheets(&self) -> Option<&SheetsClient> {
        self.inner.sheets.as_ref()
    }
}
