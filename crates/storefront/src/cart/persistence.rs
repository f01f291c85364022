//! Durable cart persistence with a time-boxed validity window.
//!
//! The cart is written through to the shopper's session under one fixed key
//! after every mutation, so a reload immediately observes the latest state.
//! On read, a snapshot older than [`CART_TTL_SECS`] is deleted and treated as
//! absent; staleness is only ever checked lazily here, never by a timer.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use super::CartLine;

/// Session key the cart snapshot is stored under.
pub const CART_KEY: &str = "bantu_cart";

/// Snapshot validity window: two hours.
pub const CART_TTL_SECS: i64 = 2 * 60 * 60;

/// The persisted form of the cart: its lines plus the capture time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Cart lines in insertion order.
    pub items: Vec<CartLine>,
    /// When the snapshot was written.
    pub timestamp: DateTime<Utc>,
}

impl CartSnapshot {
    /// Whether the snapshot is still within the validity window at `now`.
    ///
    /// Exactly two hours old counts as stale.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.timestamp) < TimeDelta::seconds(CART_TTL_SECS)
    }
}

/// Persist the cart lines, stamped with the current time.
///
/// A non-empty cart is written as a [`CartSnapshot`]; an empty cart deletes
/// the key entirely (an empty snapshot is never stored).
///
/// # Errors
///
/// Returns the session store error; callers log it and carry on, since a
/// failed write only costs cross-reload continuity.
pub async fn save(
    session: &Session,
    lines: &[CartLine],
) -> Result<(), tower_sessions::session::Error> {
    save_at(session, lines, Utc::now()).await
}

/// Load the persisted cart lines, or empty.
///
/// Absent, stale, and malformed snapshots all come back as an empty list;
/// a stale snapshot is additionally deleted so the store never holds one
/// past the window. Malformed data is logged and left in place to be
/// overwritten by the next save.
pub async fn load(session: &Session) -> Vec<CartLine> {
    load_at(session, Utc::now()).await
}

/// Clock-injected [`save`], used directly by the window tests.
pub(crate) async fn save_at(
    session: &Session,
    lines: &[CartLine],
    now: DateTime<Utc>,
) -> Result<(), tower_sessions::session::Error> {
    if lines.is_empty() {
        session.remove::<serde_json::Value>(CART_KEY).await?;
        return Ok(());
    }

    let snapshot = CartSnapshot {
        items: lines.to_vec(),
        timestamp: now,
    };
    session.insert(CART_KEY, snapshot).await
}

/// Clock-injected [`load`], used directly by the window tests.
pub(crate) async fn load_at(session: &Session, now: DateTime<Utc>) -> Vec<CartLine> {
    let snapshot = match session.get::<CartSnapshot>(CART_KEY).await {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Discarding unreadable cart snapshot");
            return Vec::new();
        }
    };

    if snapshot.is_fresh(now) {
        snapshot.items
    } else {
        tracing::debug!(
            age_secs = now.signed_duration_since(snapshot.timestamp).num_seconds(),
            "Discarding stale cart snapshot"
        );
        if let Err(e) = session.remove::<serde_json::Value>(CART_KEY).await {
            tracing::warn!(error = %e, "Failed to delete stale cart snapshot");
        }
        Vec::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::{MemoryStore, Session};

    use super::*;
    use crate::cart::Cart;
    use crate::catalog::Product;
    use bantu_ants_core::{DisplayPrice, ProductId};

    fn test_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn lines(ids: &[&str]) -> Vec<CartLine> {
        let mut cart = Cart::new();
        for id in ids {
            cart.add_item(
                Product {
                    id: ProductId::new(*id),
                    name: format!("Product {id}"),
                    price: DisplayPrice::new("$10.00"),
                    category: "Apparel".to_string(),
                    lore: String::new(),
                    image: String::new(),
                    images: Vec::new(),
                    tags: Vec::new(),
                    variants: Vec::new(),
                    shopify_variant_id: None,
                    shopify_product_id: None,
                },
                1,
                None,
            );
        }
        cart.lines().to_vec()
    }

    #[tokio::test]
    async fn test_round_trip_within_window() {
        let session = test_session();
        let saved = lines(&["a", "b"]);

        save(&session, &saved).await.unwrap();
        let loaded = load(&session).await;

        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let session = test_session();
        save(&session, &lines(&["a"])).await.unwrap();

        let first = load(&session).await;
        let second = load(&session).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_load_absent_returns_empty() {
        let session = test_session();
        assert!(load(&session).await.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_just_inside_window_survives() {
        let session = test_session();
        let saved = lines(&["a", "b"]);
        let written_at = Utc::now();

        save_at(&session, &saved, written_at).await.unwrap();

        // 1 hour 59 minutes later: still fresh.
        let loaded = load_at(&session, written_at + TimeDelta::minutes(119)).await;
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_stale_snapshot_is_discarded_and_deleted() {
        let session = test_session();
        let written_at = Utc::now();

        save_at(&session, &lines(&["a", "b"]), written_at)
            .await
            .unwrap();

        // 2 hours 1 minute later: stale, and the key must be gone afterwards.
        let loaded = load_at(&session, written_at + TimeDelta::minutes(121)).await;
        assert!(loaded.is_empty());

        let raw = session
            .get::<serde_json::Value>(CART_KEY)
            .await
            .unwrap();
        assert!(raw.is_none(), "stale snapshot key should be deleted");
    }

    #[tokio::test]
    async fn test_exactly_two_hours_counts_as_stale() {
        let session = test_session();
        let written_at = Utc::now();

        save_at(&session, &lines(&["a"]), written_at).await.unwrap();

        let loaded = load_at(&session, written_at + TimeDelta::seconds(CART_TTL_SECS)).await;
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_saving_empty_cart_deletes_the_key() {
        let session = test_session();
        save(&session, &lines(&["a"])).await.unwrap();

        save(&session, &[]).await.unwrap();

        let raw = session
            .get::<serde_json::Value>(CART_KEY)
            .await
            .unwrap();
        assert!(raw.is_none(), "empty cart must not leave a snapshot behind");
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_treated_as_absent() {
        let session = test_session();
        session
            .insert(CART_KEY, "definitely not a snapshot")
            .await
            .unwrap();

        assert!(load(&session).await.is_empty());
    }
}
