//! # Has-One-Product Rule
//!
//! The restricted-product discount requirement rule.
//!
//! ## Requirement Check Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              check_requirement(request)                                 │
//! │                                                                         │
//! │  1. Fetch "DiscountRequirement.HasOneProduct-{id}" from settings       │
//! │       │                                                                 │
//! │       ├── absent or blank ──────────────► VALID (no restriction)       │
//! │       │                                                                 │
//! │  2. Customer on the request?                                            │
//! │       │                                                                 │
//! │       ├── no ───────────────────────────► INVALID (fail closed)        │
//! │       │                                                                 │
//! │  3. Aggregate the customer's cart for the request's store              │
//! │     (shopping-cart items only, wishlist excluded)                      │
//! │       │                                                                 │
//! │  4. Evaluate the restricted-product list against the lines             │
//! │       │                                                                 │
//! │       ├── some token matches ───────────► VALID                        │
//! │       └── none (or malformed qty/range)─► INVALID                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use promo_core::cart::aggregate_lines;
use promo_core::constraint::evaluate;
use promo_core::types::{Customer, Store};

use crate::error::RuleResult;
use crate::stores::{
    DiscountRequirementStore, LocalizationStore, RoutingHelper, SettingsStore,
};

// =============================================================================
// Rule Identity
// =============================================================================

/// System name identifying this rule on discount requirement records and
/// in the settings key namespace.
pub const SYSTEM_NAME: &str = "DiscountRequirement.HasOneProduct";

/// Builds the settings key holding the restricted-product list of one
/// discount requirement.
///
/// ## Key Pattern
/// `DiscountRequirement.HasOneProduct-{requirementId}`
///
/// The admin configuration screen persists the grammar string under this
/// key; [`DiscountRule::check_requirement`] reads it back.
pub fn settings_key(requirement_id: i64) -> String {
    format!("{}-{}", SYSTEM_NAME, requirement_id)
}

/// Localized UI string resources of the configuration screen, with their
/// default values. Registered on install, removed on uninstall.
const LOCALE_RESOURCES: [(&str, &str); 4] = [
    (
        "Plugins.DiscountRules.HasOneProduct.Fields.Products",
        "Restricted products",
    ),
    (
        "Plugins.DiscountRules.HasOneProduct.Fields.Products.Hint",
        "The comma-separated list of product identifiers (e.g. 77, 123:2, 156:3-8). \
         An identifier may carry an exact quantity (123:2) or an inclusive \
         quantity range (156:3-8).",
    ),
    (
        "Plugins.DiscountRules.HasOneProduct.Fields.Products.AddNew",
        "Add product",
    ),
    (
        "Plugins.DiscountRules.HasOneProduct.Fields.Products.Choose",
        "Choose",
    ),
];

// =============================================================================
// Request / Result Types
// =============================================================================

/// A discount requirement validation request from the discount engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    /// Key of the requirement whose configuration should be checked.
    pub discount_requirement_id: i64,

    /// Customer whose cart is inspected. Absent for anonymous contexts;
    /// any configured restriction then fails closed.
    pub customer: Option<Customer>,

    /// Store the checkout is happening in; scopes cart aggregation.
    pub store: Store,
}

/// Outcome of a requirement check.
///
/// Defaults to invalid so every early return that does not explicitly
/// pass the requirement fails closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleValidationResult {
    /// Whether the requirement is satisfied.
    pub is_valid: bool,
}

impl RuleValidationResult {
    /// A passing result.
    pub fn valid() -> Self {
        RuleValidationResult { is_valid: true }
    }

    /// A failing result.
    pub fn invalid() -> Self {
        RuleValidationResult::default()
    }
}

// =============================================================================
// Plugin Contract
// =============================================================================

/// Contract every discount requirement rule plugin fulfills.
///
/// The discount engine resolves rules by [`system_name`] recorded on the
/// requirement, calls [`check_requirement`] during checkout, and links to
/// [`configuration_url`] from the discount admin screen. Install and
/// uninstall run once per plugin lifecycle.
///
/// [`system_name`]: DiscountRule::system_name
/// [`check_requirement`]: DiscountRule::check_requirement
/// [`configuration_url`]: DiscountRule::configuration_url
pub trait DiscountRule: Send + Sync {
    /// Stable identifier recorded on requirement records.
    fn system_name(&self) -> &'static str;

    /// Checks whether the customer's cart satisfies the requirement.
    fn check_requirement(&self, request: &CheckRequest) -> RuleResult<RuleValidationResult>;

    /// URL of the rule's admin configuration screen for a discount and,
    /// when editing, an existing requirement.
    fn configuration_url(&self, discount_id: i64, requirement_id: Option<i64>) -> String;

    /// Registers the rule's localized UI resources.
    fn install(&self) -> RuleResult<()>;

    /// Removes the rule's requirement records and localized resources.
    fn uninstall(&self) -> RuleResult<()>;
}

// =============================================================================
// Has-One-Product Rule
// =============================================================================

/// Requirement rule that passes when the cart holds at least one product
/// from an admin-configured restricted list.
///
/// ## Usage
/// ```rust,ignore
/// let rule = HasOneProductRule::new(settings, requirements, localization, routing);
///
/// let result = rule.check_requirement(&request)?;
/// if result.is_valid {
///     // the discount applies
/// }
/// ```
pub struct HasOneProductRule {
    settings: Arc<dyn SettingsStore>,
    requirements: Arc<dyn DiscountRequirementStore>,
    localization: Arc<dyn LocalizationStore>,
    routing: Arc<dyn RoutingHelper>,
}

impl HasOneProductRule {
    /// Creates the rule with its injected collaborators.
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        requirements: Arc<dyn DiscountRequirementStore>,
        localization: Arc<dyn LocalizationStore>,
        routing: Arc<dyn RoutingHelper>,
    ) -> Self {
        HasOneProductRule {
            settings,
            requirements,
            localization,
            routing,
        }
    }
}

impl DiscountRule for HasOneProductRule {
    fn system_name(&self) -> &'static str {
        SYSTEM_NAME
    }

    fn check_requirement(&self, request: &CheckRequest) -> RuleResult<RuleValidationResult> {
        let key = settings_key(request.discount_requirement_id);

        let configuration = match self.settings.get_by_key(&key)? {
            Some(value) => value,
            None => {
                debug!(key = %key, "no restriction configured, requirement passes");
                return Ok(RuleValidationResult::valid());
            }
        };

        // A blank restriction means none was defined
        if configuration.trim().is_empty() {
            debug!(key = %key, "blank restriction configured, requirement passes");
            return Ok(RuleValidationResult::valid());
        }

        let customer = match &request.customer {
            Some(customer) => customer,
            None => {
                debug!(key = %key, "no customer on request, requirement fails");
                return Ok(RuleValidationResult::invalid());
            }
        };

        let lines = aggregate_lines(&customer.shopping_cart_items, &request.store.id);
        let is_valid = evaluate(&configuration, &lines);

        debug!(
            key = %key,
            customer_id = %customer.id,
            line_count = lines.len(),
            is_valid,
            "evaluated restricted product list"
        );

        Ok(RuleValidationResult { is_valid })
    }

    fn configuration_url(&self, discount_id: i64, requirement_id: Option<i64>) -> String {
        let mut route_values = vec![("discountId".to_string(), discount_id.to_string())];
        if let Some(requirement_id) = requirement_id {
            route_values.push((
                "discountRequirementId".to_string(),
                requirement_id.to_string(),
            ));
        }

        let url = self
            .routing
            .action_url("Configure", "DiscountRulesHasOneProduct", &route_values);

        // The admin area prefixes the store location itself
        match url.strip_prefix('/') {
            Some(stripped) => stripped.to_string(),
            None => url,
        }
    }

    fn install(&self) -> RuleResult<()> {
        for (resource_key, default_value) in LOCALE_RESOURCES {
            self.localization.add_or_update(resource_key, default_value)?;
        }

        info!(rule = SYSTEM_NAME, "installed discount requirement rule");
        Ok(())
    }

    fn uninstall(&self) -> RuleResult<()> {
        let requirements = self.requirements.all()?;
        for requirement in requirements
            .iter()
            .filter(|r| r.rule_system_name == SYSTEM_NAME)
        {
            self.requirements.delete(requirement)?;
        }

        for (resource_key, _) in LOCALE_RESOURCES {
            self.localization.delete(resource_key)?;
        }

        info!(rule = SYSTEM_NAME, "uninstalled discount requirement rule");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RuleError, StoreError};
    use crate::stores::{
        DiscountRequirement, MockDiscountRequirementStore, MockLocalizationStore,
        MockRoutingHelper, MockSettingsStore,
    };
    use promo_core::types::CartItem;

    const STORE_ID: &str = "5d68e9f0-5a9c-4a4e-b24e-0a9d2f2a6a01";

    fn test_store() -> Store {
        Store {
            id: STORE_ID.to_string(),
            name: "Main store".to_string(),
        }
    }

    fn customer_with_items(items: Vec<CartItem>) -> Customer {
        Customer {
            id: "c2c5a7e4-93b8-4a6e-8a64-3a1d25b1b1f7".to_string(),
            shopping_cart_items: items,
        }
    }

    fn request(requirement_id: i64, customer: Option<Customer>) -> CheckRequest {
        CheckRequest {
            discount_requirement_id: requirement_id,
            customer,
            store: test_store(),
        }
    }

    /// Rule whose settings store serves one fixed configuration string.
    fn rule_with_configuration(configuration: Option<&str>) -> HasOneProductRule {
        let configuration = configuration.map(str::to_string);
        let mut settings = MockSettingsStore::new();
        settings
            .expect_get_by_key()
            .returning(move |_| Ok(configuration.clone()));

        rule_with(settings)
    }

    fn rule_with(settings: MockSettingsStore) -> HasOneProductRule {
        HasOneProductRule::new(
            Arc::new(settings),
            Arc::new(MockDiscountRequirementStore::new()),
            Arc::new(MockLocalizationStore::new()),
            Arc::new(MockRoutingHelper::new()),
        )
    }

    #[test]
    fn test_settings_key_pattern() {
        assert_eq!(settings_key(42), "DiscountRequirement.HasOneProduct-42");
    }

    #[test]
    fn test_lookup_uses_namespaced_key() {
        let mut settings = MockSettingsStore::new();
        settings
            .expect_get_by_key()
            .withf(|key| key == "DiscountRequirement.HasOneProduct-7")
            .times(1)
            .returning(|_| Ok(None));

        let rule = rule_with(settings);
        let result = rule.check_requirement(&request(7, None)).unwrap();
        assert!(result.is_valid);
    }

    #[test]
    fn test_absent_configuration_passes() {
        let rule = rule_with_configuration(None);
        let result = rule.check_requirement(&request(1, None)).unwrap();
        assert!(result.is_valid);
    }

    #[test]
    fn test_blank_configuration_passes() {
        let rule = rule_with_configuration(Some("   "));
        let result = rule.check_requirement(&request(1, None)).unwrap();
        assert!(result.is_valid);
    }

    #[test]
    fn test_missing_customer_fails_when_configured() {
        let rule = rule_with_configuration(Some("77"));
        let result = rule.check_requirement(&request(1, None)).unwrap();
        assert!(!result.is_valid);
    }

    #[test]
    fn test_matching_cart_passes() {
        let rule = rule_with_configuration(Some("77"));
        let customer = customer_with_items(vec![CartItem::new(77, STORE_ID, 2)]);

        let result = rule.check_requirement(&request(1, Some(customer))).unwrap();
        assert!(result.is_valid);
    }

    #[test]
    fn test_cart_in_other_store_fails() {
        let rule = rule_with_configuration(Some("77"));
        let customer = customer_with_items(vec![CartItem::new(77, "other-store", 2)]);

        let result = rule.check_requirement(&request(1, Some(customer))).unwrap();
        assert!(!result.is_valid);
    }

    #[test]
    fn test_settings_failure_propagates() {
        let mut settings = MockSettingsStore::new();
        settings.expect_get_by_key().returning(|_| {
            Err(StoreError::Unavailable {
                message: "connection refused".to_string(),
            })
        });

        let rule = rule_with(settings);
        let err = rule.check_requirement(&request(1, None)).unwrap_err();
        assert!(matches!(err, RuleError::Store(_)));
    }

    #[test]
    fn test_configuration_url_strips_one_leading_slash() {
        let mut routing = MockRoutingHelper::new();
        routing
            .expect_action_url()
            .withf(|action, controller, route_values| {
                action == "Configure"
                    && controller == "DiscountRulesHasOneProduct"
                    && route_values
                        == [
                            ("discountId".to_string(), "7".to_string()),
                            ("discountRequirementId".to_string(), "42".to_string()),
                        ]
            })
            .returning(|_, _, _| {
                "/Admin/DiscountRulesHasOneProduct/Configure?discountId=7".to_string()
            });

        let rule = HasOneProductRule::new(
            Arc::new(MockSettingsStore::new()),
            Arc::new(MockDiscountRequirementStore::new()),
            Arc::new(MockLocalizationStore::new()),
            Arc::new(routing),
        );

        let url = rule.configuration_url(7, Some(42));
        assert_eq!(url, "Admin/DiscountRulesHasOneProduct/Configure?discountId=7");
    }

    #[test]
    fn test_configuration_url_omits_requirement_id_for_new_requirements() {
        let mut routing = MockRoutingHelper::new();
        routing
            .expect_action_url()
            .withf(|_, _, route_values| {
                route_values == [("discountId".to_string(), "7".to_string())]
            })
            .returning(|_, _, _| "no-leading-slash".to_string());

        let rule = HasOneProductRule::new(
            Arc::new(MockSettingsStore::new()),
            Arc::new(MockDiscountRequirementStore::new()),
            Arc::new(MockLocalizationStore::new()),
            Arc::new(routing),
        );

        // Only a single leading separator is ever stripped
        assert_eq!(rule.configuration_url(7, None), "no-leading-slash");
    }

    #[test]
    fn test_install_registers_four_resources() {
        let mut localization = MockLocalizationStore::new();
        localization
            .expect_add_or_update()
            .withf(|key, _| key.starts_with("Plugins.DiscountRules.HasOneProduct.Fields.Products"))
            .times(4)
            .returning(|_, _| Ok(()));

        let rule = HasOneProductRule::new(
            Arc::new(MockSettingsStore::new()),
            Arc::new(MockDiscountRequirementStore::new()),
            Arc::new(localization),
            Arc::new(MockRoutingHelper::new()),
        );

        rule.install().unwrap();
    }

    #[test]
    fn test_uninstall_removes_only_own_requirements() {
        let mut requirements = MockDiscountRequirementStore::new();
        requirements.expect_all().returning(|| {
            Ok(vec![
                DiscountRequirement {
                    id: 1,
                    rule_system_name: SYSTEM_NAME.to_string(),
                },
                DiscountRequirement {
                    id: 2,
                    rule_system_name: "DiscountRequirement.SpentAmount".to_string(),
                },
                DiscountRequirement {
                    id: 3,
                    rule_system_name: SYSTEM_NAME.to_string(),
                },
            ])
        });
        requirements
            .expect_delete()
            .withf(|r| r.rule_system_name == SYSTEM_NAME)
            .times(2)
            .returning(|_| Ok(()));

        let mut localization = MockLocalizationStore::new();
        localization
            .expect_delete()
            .times(4)
            .returning(|_| Ok(()));

        let rule = HasOneProductRule::new(
            Arc::new(MockSettingsStore::new()),
            Arc::new(requirements),
            Arc::new(localization),
            Arc::new(MockRoutingHelper::new()),
        );

        rule.uninstall().unwrap();
    }
}
