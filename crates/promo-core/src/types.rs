//! # Domain Types
//!
//! Core domain types shared by the Promo rule plugins.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │      Store      │   │    CartItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  product_id     │       │
//! │  │  cart items     │   │  name           │   │  store_id       │       │
//! │  └─────────────────┘   └─────────────────┘   │  cart_type      │       │
//! │                                              │  quantity       │       │
//! │  ┌─────────────────┐                         └─────────────────┘       │
//! │  │    CartType     │                                                   │
//! │  │  ─────────────  │                                                   │
//! │  │  ShoppingCart   │                                                   │
//! │  │  Wishlist       │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Conventions
//! - Customers and stores carry UUID string ids, immutable once assigned
//! - Products are referenced by their integer catalog id, the same id the
//!   restricted-product grammar names

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Cart Type
// =============================================================================

/// Which basket a cart item belongs to.
///
/// Only `ShoppingCart` items participate in discount requirement
/// evaluation; wishlist items are never counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CartType {
    /// Items the customer intends to buy now.
    ShoppingCart,
    /// Items saved for later.
    Wishlist,
}

// =============================================================================
// Cart Item
// =============================================================================

/// One raw entry in a customer's cart.
///
/// A customer may hold several items for the same product (added at
/// different times, or from different stores). Aggregation into
/// [`crate::cart::CartLine`]s happens per evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Integer catalog id of the product.
    pub product_id: i64,

    /// Store this item was added in (UUID).
    pub store_id: String,

    /// Shopping cart or wishlist.
    pub cart_type: CartType,

    /// Units of the product in this entry.
    pub quantity: i64,

    /// When this item was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new shopping-cart item stamped with the current time.
    pub fn new(product_id: i64, store_id: impl Into<String>, quantity: i64) -> Self {
        CartItem {
            product_id,
            store_id: store_id.into(),
            cart_type: CartType::ShoppingCart,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Creates a wishlist item stamped with the current time.
    pub fn wishlist(product_id: i64, store_id: impl Into<String>, quantity: i64) -> Self {
        CartItem {
            cart_type: CartType::Wishlist,
            ..CartItem::new(product_id, store_id, quantity)
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer and the cart contents a rule evaluates against.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Every cart entry the customer holds, across stores and cart types.
    pub shopping_cart_items: Vec<CartItem>,
}

impl Customer {
    /// Creates a customer with an empty cart.
    pub fn new(id: impl Into<String>) -> Self {
        Customer {
            id: id.into(),
            shopping_cart_items: Vec::new(),
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// A storefront of the platform. Cart aggregation is scoped to one store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the admin area.
    pub name: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
