//! # Error Types
//!
//! Errors crossing the rule plugin boundary.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages
//! 3. Malformed restricted-product tokens are NOT errors here: they fail
//!    the requirement closed inside evaluation and never surface

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Failures raised by the host-side collaborator stores.
///
/// The stores themselves live on the host platform (database-backed
/// settings, localization tables). This type is how their failures
/// cross the trait seam.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached at all.
    #[error("storage backend unavailable: {message}")]
    Unavailable { message: String },

    /// The backend rejected or failed the operation.
    #[error("storage operation failed: {message}")]
    Backend { message: String },
}

// =============================================================================
// Rule Error
// =============================================================================

/// Errors a discount requirement rule reports to the discount engine.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A collaborator store failed mid-operation.
    #[error("collaborator store error: {0}")]
    Store(#[from] StoreError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with RuleError.
pub type RuleResult<T> = Result<T, RuleError>;

// =============================================================================
// Unit Tests
// =============================================================================
