//! # Error Types
//!
//! Domain-specific error types for promo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  promo-core errors (this file)                                         │
//! │  └── ConstraintError  - Restricted-product token parse failures        │
//! │                                                                         │
//! │  promo-rules errors (separate crate)                                   │
//! │  ├── StoreError       - Collaborator store failures                    │
//! │  └── RuleError        - What the discount engine sees                  │
//! │                                                                         │
//! │  Flow: ConstraintError stays inside evaluation (fail-closed),          │
//! │        StoreError → RuleError → host platform                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending token)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Constraint Error
// =============================================================================

/// Parse failures for one restricted-product token.
///
/// The variant records which grammar form the token was in when parsing
/// failed, because evaluation treats the forms differently: a bare
/// product id that fails to parse is skipped, while a malformed quantity
/// or quantity range aborts the whole evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    /// A bare token (no colon) is not a valid integer product id.
    #[error("'{token}' is not a valid product id")]
    InvalidProductId { token: String },

    /// A `ProductId:Quantity` token has a non-integer id or quantity.
    #[error("'{token}' has an invalid exact-quantity form")]
    InvalidQuantity { token: String },

    /// A `ProductId:Min-Max` token has a non-integer id, min or max.
    #[error("'{token}' has an invalid quantity-range form")]
    InvalidRange { token: String },
}

impl ConstraintError {
    /// Whether this parse failure aborts the whole evaluation.
    ///
    /// ## Rules
    /// - `InvalidProductId` is tolerated: the token is skipped
    /// - `InvalidQuantity` / `InvalidRange` are fatal: evaluation stops
    ///   and the requirement fails closed
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ConstraintError::InvalidProductId { .. })
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ConstraintError.
pub type CoreResult<T> = Result<T, ConstraintError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConstraintError::InvalidProductId {
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "'abc' is not a valid product id");

        let err = ConstraintError::InvalidQuantity {
            token: "77:abc".to_string(),
        };
        assert_eq!(err.to_string(), "'77:abc' has an invalid exact-quantity form");
    }

    #[test]
    fn test_fatality_split() {
        let skip = ConstraintError::InvalidProductId {
            token: "abc".to_string(),
        };
        assert!(!skip.is_fatal());

        let abort = ConstraintError::InvalidQuantity {
            token: "77:abc".to_string(),
        };
        assert!(abort.is_fatal());

        let abort = ConstraintError::InvalidRange {
            token: "77:1-x".to_string(),
        };
        assert!(abort.is_fatal());
    }
}
