//! # Cart Line Aggregation
//!
//! Collapses a customer's raw cart entries into one line per product.
//!
//! ## Aggregation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Line Aggregation                                │
//! │                                                                         │
//! │  Raw cart items                         Aggregated lines               │
//! │  ──────────────                         ────────────────               │
//! │                                                                         │
//! │  product 10, store A, cart,  qty 1 ──┐                                 │
//! │  product 10, store A, cart,  qty 2 ──┼──► { product 10, total 3 }     │
//! │  product 10, store B, cart,  qty 9 ──┘    (store B filtered out)      │
//! │                                                                         │
//! │  product 77, store A, wish,  qty 4 ─────► (wishlist filtered out)     │
//! │                                                                         │
//! │  product 55, store A, cart,  qty 5 ─────► { product 55, total 5 }     │
//! │                                                                         │
//! │  NOTE: lines keep first-seen product order; quantity sums are          │
//! │        commutative, so item order never changes the outcome.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{CartItem, CartType};

// =============================================================================
// Cart Line
// =============================================================================

/// Aggregated view of all cart entries for one product in one store.
///
/// Derived fresh per evaluation; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Integer catalog id of the product.
    pub product_id: i64,

    /// Sum of quantities across every entry of this product.
    pub total_quantity: i64,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Aggregates raw cart items into per-product lines for one store.
///
/// ## Rules
/// - Only `ShoppingCart` items count; wishlist entries are excluded
/// - Only items belonging to `store_id` count
/// - Quantities of the same product are summed into one line
///
/// ## Example
/// ```rust
/// use promo_core::cart::aggregate_lines;
/// use promo_core::types::CartItem;
///
/// let items = vec![
///     CartItem::new(10, "store-1", 1),
///     CartItem::new(10, "store-1", 2),
/// ];
///
/// let lines = aggregate_lines(&items, "store-1");
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].total_quantity, 3);
/// ```
pub fn aggregate_lines(items: &[CartItem], store_id: &str) -> Vec<CartLine> {
    let mut lines: Vec<CartLine> = Vec::new();

    for item in items {
        if item.cart_type != CartType::ShoppingCart || item.store_id != store_id {
            continue;
        }

        // Same product already seen: fold the quantity into its line
        if let Some(line) = lines.iter_mut().find(|l| l.product_id == item.product_id) {
            line.total_quantity += item.quantity;
        } else {
            lines.push(CartLine {
                product_id: item.product_id,
                total_quantity: item.quantity,
            });
        }
    }

    lines
}

// =============================================================================
// Unit Tests
// =============================================================================
