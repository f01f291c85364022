//! Route handlers and router assembly.

pub mod cart;
pub mod catalog;
pub mod forms;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(catalog::index))
        .route("/api/cart", get(cart::show))
        .route("/api/cart/count", get(cart::count))
        .route("/api/cart/add", post(cart::add))
        .route("/api/cart/update", post(cart::update))
        .route("/api/cart/remove", post(cart::remove))
        .route("/api/cart/checkout", post(cart::checkout))
        .route("/api/forms", post(forms::submit))
}
