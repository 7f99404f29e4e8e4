//! # promo-core: Pure Business Logic for Promo Discount Rules
//!
//! This crate is the **heart** of the Promo rule plugins. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Promo Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Host E-Commerce Platform                       │   │
//! │  │    Checkout flow ──► Discount engine ──► Requirement rules      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    promo-rules (plugin layer)                   │   │
//! │  │    settings lookup, lifecycle hooks, configuration URL          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ promo-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────────┐             │   │
//! │  │   │   types   │  │   cart    │  │   constraint   │             │   │
//! │  │   │ Customer  │  │ CartLine  │  │  grammar parse │             │   │
//! │  │   │ CartItem  │  │ aggregate │  │  evaluation    │             │   │
//! │  │   └───────────┘  └───────────┘  └────────────────┘             │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Store, CartItem, etc.)
//! - [`cart`] - Cart line aggregation over raw cart items
//! - [`constraint`] - Restricted-product grammar parsing and evaluation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use promo_core::cart::CartLine;
//! use promo_core::constraint::evaluate;
//!
//! let lines = vec![CartLine { product_id: 77, total_quantity: 2 }];
//!
//! // Product 77 in any quantity satisfies the restriction
//! assert!(evaluate("77, 123:2, 156:3-8", &lines));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod constraint;
pub mod error;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use promo_core::Constraint` instead of
// `use promo_core::constraint::Constraint`

pub use cart::{aggregate_lines, CartLine};
pub use constraint::{evaluate, Constraint};
pub use error::{ConstraintError, CoreResult};
pub use types::*;
