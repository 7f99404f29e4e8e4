//! # promo-rules: Discount Requirement Rule Plugins
//!
//! Pluggable rules a discount must satisfy before it applies. The crate
//! ships the restricted-product rule and the trait seams it reaches the
//! host platform through.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       promo-rules Layout                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Discount Engine (host)                     │   │
//! │  │   resolves rules by system name ──► check_requirement(...)     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │   ┌───────────┐  ┌───────────────────┐  ┌───────────────────┐  │   │
//! │  │   │   rule    │  │      stores       │  │      error        │  │   │
//! │  │   │ contract, │  │ collaborator      │  │ StoreError,       │  │   │
//! │  │   │ HasOne-   │  │ trait seams       │  │ RuleError         │  │   │
//! │  │   │ Product   │  │ (host-side impls) │  │                   │  │   │
//! │  │   └───────────┘  └───────────────────┘  └───────────────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 promo-core (pure evaluation)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`rule`] - The `DiscountRule` contract and the has-one-product rule
//! - [`stores`] - Collaborator trait seams onto the host platform
//! - [`error`] - Store and rule error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod rule;
pub mod stores;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{RuleError, RuleResult, StoreError, StoreResult};
pub use rule::{
    settings_key, CheckRequest, DiscountRule, HasOneProductRule, RuleValidationResult,
    SYSTEM_NAME,
};
pub use stores::{
    DiscountRequirement, DiscountRequirementStore, LocalizationStore, RoutingHelper,
    SettingsStore,
};
