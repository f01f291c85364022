//! In-memory cart state and its mutation API.
//!
//! The cart is the authoritative ordered list of [`CartLine`]s for one
//! shopper. It is loaded from the session at the start of a request, mutated,
//! and written back through [`persistence`] before the response is produced.
//!
//! Lines are unique per (product id, variant id-or-none) pair: adding an
//! already-present pair increments its quantity instead of appending a
//! duplicate line.

pub mod persistence;

use std::time::Duration;

use bantu_ants_core::{DisplayPrice, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Product, Variant};

/// How long the "Added to cart" notification stays on screen.
pub const TOAST_DISMISS: Duration = Duration::from_secs(3);

/// One row in the cart: a product, an optional selected variant, and a
/// positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product: Product,
    /// Units of the product/variant in the cart.
    pub quantity: u32,
    /// The selected variant, if the shopper picked one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variant: Option<Variant>,
}

impl CartLine {
    /// The effective unit price: the selected variant's price if present,
    /// else the product base price.
    #[must_use]
    pub fn unit_price(&self) -> &DisplayPrice {
        self.selected_variant
            .as_ref()
            .map_or(&self.product.price, |v| &v.price)
    }

    /// Whether this line is for the given (product, variant-or-none) pair.
    fn matches(&self, product_id: &ProductId, variant_id: Option<&str>) -> bool {
        self.product.id == *product_id
            && self.selected_variant.as_ref().map(|v| v.id.as_str()) == variant_id
    }
}

/// Event emitted by a cart mutation, for the UI layer to react to.
///
/// Events replace direct UI calls so the store stays testable: the routes
/// turn `ItemAdded` into a transient toast with the [`TOAST_DISMISS`]
/// auto-dismiss timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// An item was added (or its quantity incremented).
    ItemAdded {
        product_id: ProductId,
        name: String,
    },
}

/// The in-memory cart: an ordered list of lines with derived totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuild a cart from persisted lines.
    #[must_use]
    pub const fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of a product (and optional variant).
    ///
    /// If a line for the same (product id, variant id-or-none) pair exists,
    /// its quantity is incremented and it keeps its position; otherwise a new
    /// line is appended. A zero quantity is treated as one.
    pub fn add_item(
        &mut self,
        product: Product,
        quantity: u32,
        selected_variant: Option<Variant>,
    ) -> CartEvent {
        let quantity = quantity.max(1);
        let variant_id = selected_variant.as_ref().map(|v| v.id.as_str());

        let event = CartEvent::ItemAdded {
            product_id: product.id.clone(),
            name: product.name.clone(),
        };

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(&product.id, variant_id))
        {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine {
                product,
                quantity,
                selected_variant,
            });
        }

        event
    }

    /// Set the quantity of every line matching `product_id`.
    ///
    /// Matching is by product id ALONE: if several variants of the same
    /// product are in the cart, all of them are set to the same quantity.
    /// That mirrors the shipped behavior and is pinned by a test below; see
    /// DESIGN.md before "fixing" it. A zero quantity is treated as one
    /// (removal is an explicit [`Self::remove_item`], never a zeroed line).
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        let quantity = quantity.max(1);
        for line in &mut self.lines {
            if line.product.id == *product_id {
                line.quantity = quantity;
            }
        }
    }

    /// Remove every line matching `product_id` (all variants of it).
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| line.product.id != *product_id);
    }

    /// Total number of units across all lines (the badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Sum of line totals (unit price × quantity) as a decimal amount.
    ///
    /// Prices our own constructors produce always parse; a line whose price
    /// still fails to parse contributes zero rather than poisoning the total.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| {
                let unit = line.unit_price().amount().unwrap_or_else(|e| {
                    tracing::warn!(
                        product_id = %line.product.id,
                        error = %e,
                        "Unparseable price in cart, counting as zero"
                    );
                    Decimal::ZERO
                });
                unit * Decimal::from(line.quantity)
            })
            .sum()
    }
}
