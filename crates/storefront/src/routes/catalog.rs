//! Catalog route handlers.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::catalog::{self, Product, static_products};
use crate::state::AppState;

/// Catalog response payload.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<Product>,
}

/// The aggregated catalog: static list merged with the live feed.
///
/// A failed or unconfigured feed degrades to the static-only view; the
/// shopper sees "no live products", never an error page.
pub(crate) async fn aggregated(state: &AppState) -> Vec<Product> {
    catalog::aggregate(static_products(), live_products(state).await)
}

async fn live_products(state: &AppState) -> Vec<Product> {
    let Some(client) = state.storefront() else {
        return Vec::new();
    };

    match client.fetch_products().await {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Failed to fetch live products, serving static catalog only"
            );
            Vec::new()
        }
    }
}

/// List the aggregated product catalog.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        products: aggregated(&state).await,
    })
}
