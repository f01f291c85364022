//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BANTU_HOST` - Bind address (default: 127.0.0.1)
//! - `BANTU_PORT` - Listen port (default: 3000)
//! - `BANTU_BASE_URL` - Public URL for the site (default: <http://localhost:3000>)
//! - `SHOPIFY_STORE` - Storefront domain used for checkout URLs
//!   (e.g. your-store.myshopify.com); without it checkout is unavailable
//! - `SHOPIFY_PRODUCTS_URL` - Products feed endpoint; without it the catalog
//!   serves the static list only
//! - `SHEETS_WEBAPP_URL` - Spreadsheet web-app endpoint for form submissions;
//!   without it submissions are logged and dropped
//! - `SENTRY_DSN` - Sentry error tracking DSN
//!
//! Every external collaborator is optional on purpose: a missing variable
//! degrades the matching feature instead of failing startup.

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Shopify storefront configuration
    pub shopify: ShopifyConfig,
    /// Form submission collaborator configuration
    pub sheets: SheetsConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Shopify storefront configuration.
#[derive(Debug, Clone, Default)]
pub struct ShopifyConfig {
    /// Storefront domain (e.g. your-store.myshopify.com), used to build
    /// checkout URLs. `None` means checkout handoff is unavailable.
    pub store: Option<String>,
    /// Products feed endpoint. `None` means no live products are fetched.
    pub products_url: Option<String>,
}

/// Spreadsheet web-app configuration for form submissions.
///
/// Implements `Debug` manually: the web-app URL embeds a deployment token
/// that acts as a write capability, so it is redacted.
#[derive(Clone, Default)]
pub struct SheetsConfig {
    /// Web-app endpoint URL. `None` disables form forwarding.
    pub webapp_url: Option<SecretString>,
}

impl std::fmt::Debug for SheetsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsConfig")
            .field(
                "webapp_url",
                &self.webapp_url.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("BANTU_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BANTU_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("BANTU_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("BANTU_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("BANTU_BASE_URL", "http://localhost:3000");

        Ok(Self {
            host,
            port,
            base_url,
            shopify: ShopifyConfig::from_env(),
            sheets: SheetsConfig::from_env(),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ShopifyConfig {
    fn from_env() -> Self {
        Self {
            store: get_optional_env("SHOPIFY_STORE"),
            products_url: get_optional_env("SHOPIFY_PRODUCTS_URL"),
        }
    }
}

impl SheetsConfig {
    fn from_env() -> Self {
        Self {
            webapp_url: get_optional_env("SHEETS_WEBAPP_URL").map(SecretString::from),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
