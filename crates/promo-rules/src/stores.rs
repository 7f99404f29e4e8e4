//! # Collaborator Stores
//!
//! Trait seams onto the host platform's storage and routing services.
//!
//! ## Seam Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Collaborator Seams                                  │
//! │                                                                         │
//! │   Rule plugin (this crate)          Host platform                      │
//! │   ────────────────────────          ─────────────                      │
//! │                                                                         │
//! │   SettingsStore ───────────────────► key-value settings table          │
//! │   DiscountRequirementStore ────────► discount requirement records      │
//! │   LocalizationStore ───────────────► localized UI string resources     │
//! │   RoutingHelper ───────────────────► admin-area URL generation         │
//! │                                                                         │
//! │   The rule holds each seam as Arc<dyn Trait> injected at              │
//! │   construction; nothing is looked up ambiently.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Implementations live on the host side. Unit tests mock these traits;
//! integration tests use in-memory fakes.

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

// =============================================================================
// Discount Requirement Record
// =============================================================================

/// One discount requirement record as the host stores it.
///
/// `rule_system_name` names the rule plugin that owns the record and is
/// how uninstall finds the records to remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRequirement {
    /// Record id assigned by the host.
    pub id: i64,

    /// System name of the rule this requirement is bound to.
    pub rule_system_name: String,
}

// =============================================================================
// Settings Store
// =============================================================================

/// Key-value settings lookup.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` when no value exists.
    fn get_by_key(&self, key: &str) -> StoreResult<Option<String>>;
}

// =============================================================================
// Discount Requirement Store
// =============================================================================

/// Access to the host's discount requirement records.
#[cfg_attr(test, mockall::automock)]
pub trait DiscountRequirementStore: Send + Sync {
    /// Returns every discount requirement record, across all rules.
    fn all(&self) -> StoreResult<Vec<DiscountRequirement>>;

    /// Deletes one requirement record. Deleting a record that no longer
    /// exists is not an error.
    fn delete(&self, requirement: &DiscountRequirement) -> StoreResult<()>;
}

// =============================================================================
// Localization Store
// =============================================================================

/// Storage for localized UI string resources.
#[cfg_attr(test, mockall::automock)]
pub trait LocalizationStore: Send + Sync {
    /// Creates the resource if absent, otherwise updates its value.
    fn add_or_update(&self, resource_key: &str, default_value: &str) -> StoreResult<()>;

    /// Deletes the resource. Deleting an absent resource is not an error.
    fn delete(&self, resource_key: &str) -> StoreResult<()>;
}

// =============================================================================
// Routing Helper
// =============================================================================

/// Admin-area URL generation.
#[cfg_attr(test, mockall::automock)]
pub trait RoutingHelper: Send + Sync {
    /// Builds the URL of a controller action with the given route values.
    fn action_url(
        &self,
        action: &str,
        controller: &str,
        route_values: &[(String, String)],
    ) -> String;
}

// =============================================================================
// Unit Tests
// =============================================================================
