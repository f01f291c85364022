//! Cart route handlers.
//!
//! Every handler follows the same shape: load the cart from the session,
//! mutate it in memory, write it back through [`persistence`] before
//! responding. The write is ordered after the mutation within the same
//! task, so a reload right after a mutation always observes the new state.
//! A failed write is logged and the response still reflects the in-memory
//! cart; the only cost is cross-reload continuity.

use axum::{Json, extract::State};
use bantu_ants_core::{DisplayPrice, ProductId, VariantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::cart::{Cart, CartEvent, CartLine, TOAST_DISMISS, persistence};
use crate::checkout::{build_line_items, checkout_url};
use crate::error::{AppError, Result};
use crate::routes::catalog::aggregated;
use crate::state::AppState;

// =============================================================================
// View Types
// =============================================================================

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub variant_title: Option<String>,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        let unit = line.unit_price().amount().unwrap_or(Decimal::ZERO);
        let line_total = unit * Decimal::from(line.quantity);

        Self {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            category: line.product.category.clone(),
            variant_title: line.selected_variant.as_ref().map(|v| v.title.clone()),
            quantity: line.quantity,
            price: line.unit_price().to_string(),
            line_price: DisplayPrice::from_amount(line_total).to_string(),
            image: line.product.image.clone(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: DisplayPrice::from_amount(cart.total()).to_string(),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Request / Response Payloads
// =============================================================================

/// Add-to-cart request.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub variant_id: Option<VariantId>,
    pub quantity: Option<u32>,
}

/// Quantity update request. Keyed by product id alone; every variant-line of
/// the product moves to the new quantity (see the cart store docs).
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Remove-from-cart request. Removes every variant-line of the product.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: ProductId,
}

/// Transient notification the UI shows after an add.
#[derive(Debug, Serialize)]
pub struct Toast {
    pub message: String,
    pub product_id: ProductId,
    /// Auto-dismiss timeout in milliseconds.
    pub dismiss_ms: u64,
}

/// Add-to-cart response: the new badge count plus the toast to show.
#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub item_count: u32,
    pub toast: Toast,
}

/// Cart count badge response.
#[derive(Debug, Serialize)]
pub struct CartCountResponse {
    pub item_count: u32,
}

/// Checkout handoff response.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    /// The storefront cart URL to navigate to.
    pub url: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Persist the cart, logging (not failing) on a write error.
async fn save_cart(session: &Session, cart: &Cart) {
    if let Err(e) = persistence::save(session, cart.lines()).await {
        tracing::error!(error = %e, "Failed to persist cart to session");
    }
}

/// Show the current cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Json<CartView> {
    let cart = Cart::from_lines(persistence::load(&session).await);
    Json(CartView::from(&cart))
}

/// Get the cart count badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Json<CartCountResponse> {
    let cart = Cart::from_lines(persistence::load(&session).await);
    Json(CartCountResponse {
        item_count: cart.item_count(),
    })
}

/// Add a product (and optional variant) to the cart.
///
/// The product is resolved against the aggregated catalog so the stored line
/// carries full display data, exactly what a reload needs to re-render the
/// cart without another lookup.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<AddToCartRequest>,
) -> Result<Json<AddToCartResponse>> {
    let product = aggregated(&state)
        .await
        .into_iter()
        .find(|p| p.id == form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let selected_variant = match &form.variant_id {
        Some(variant_id) => Some(
            product
                .variant(variant_id)
                .cloned()
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "product {} has no variant {variant_id}",
                        product.id
                    ))
                })?,
        ),
        None => None,
    };

    let mut cart = Cart::from_lines(persistence::load(&session).await);
    let event = cart.add_item(product, form.quantity.unwrap_or(1), selected_variant);
    save_cart(&session, &cart).await;

    let CartEvent::ItemAdded { product_id, .. } = event;
    Ok(Json(AddToCartResponse {
        item_count: cart.item_count(),
        toast: Toast {
            message: "Added to cart".to_string(),
            product_id,
            dismiss_ms: u64::try_from(TOAST_DISMISS.as_millis()).unwrap_or(3_000),
        },
    }))
}

/// Update the quantity of a product already in the cart.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(form): Json<UpdateCartRequest>,
) -> Json<CartView> {
    let mut cart = Cart::from_lines(persistence::load(&session).await);
    cart.update_quantity(&form.product_id, form.quantity);
    save_cart(&session, &cart).await;

    Json(CartView::from(&cart))
}

/// Remove a product from the cart.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(form): Json<RemoveFromCartRequest>,
) -> Json<CartView> {
    let mut cart = Cart::from_lines(persistence::load(&session).await);
    cart.remove_item(&form.product_id);
    save_cart(&session, &cart).await;

    Json(CartView::from(&cart))
}

/// Hand the cart off to the external storefront checkout.
///
/// The cart is read, never written: a failed handoff leaves it intact so
/// the shopper can retry.
#[instrument(skip(state, session))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CheckoutResponse>> {
    let cart = Cart::from_lines(persistence::load(&session).await);
    let items = build_line_items(cart.lines());

    if items.is_empty() {
        return Err(AppError::Unprocessable(
            "No valid products in cart.".to_string(),
        ));
    }

    let url = checkout_url(state.config().shopify.store.as_deref(), &items).ok_or_else(|| {
        AppError::Unprocessable(
            "Unable to create checkout. Please check your storefront configuration.".to_string(),
        )
    })?;

    Ok(Json(CheckoutResponse { url }))
}
