//! # Restricted-Product Constraints
//!
//! Parses the admin-configured restricted-product list and evaluates it
//! against aggregated cart lines.
//!
//! ## Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Restricted-Product Configuration String                    │
//! │                                                                         │
//! │  <token>(,<token>)*                                                    │
//! │                                                                         │
//! │  token := ProductId                      "77"       any quantity       │
//! │         | ProductId:Quantity             "123:2"    exactly 2 units    │
//! │         | ProductId:MinQty-MaxQty        "156:3-8"  3 to 8 inclusive   │
//! │                                                                         │
//! │  "77, 123:2, 156:3-8" passes when the cart holds product 77 in any     │
//! │  quantity, OR product 123 with exactly 2 units, OR product 156 with    │
//! │  3 to 8 units.                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Malformed Tokens
//! A bare token that is not an integer is skipped; a malformed
//! exact-quantity or quantity-range token aborts the whole evaluation
//! and the requirement fails closed. See [`ConstraintError::is_fatal`].

use crate::cart::CartLine;
use crate::error::{ConstraintError, CoreResult};

// =============================================================================
// Constraint
// =============================================================================

/// One parsed restricted-product rule.
///
/// Immutable once parsed. The variant mirrors the grammar form the token
/// was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The product must be in the cart; quantity is ignored.
    Any { product_id: i64 },

    /// The product's aggregated quantity must equal `quantity` exactly.
    ExactQuantity { product_id: i64, quantity: i64 },

    /// The product's aggregated quantity must fall inside the inclusive
    /// range. A reversed range (min > max) can never match.
    QuantityRange {
        product_id: i64,
        min_quantity: i64,
        max_quantity: i64,
    },
}

impl Constraint {
    /// Parses one restricted-product token.
    ///
    /// ## Rules
    /// - No colon: the whole token is the product id
    /// - Colon, no hyphen after it: `ProductId:Quantity`
    /// - Colon with a hyphen after it: `ProductId:Min-Max`
    ///
    /// Integer parts tolerate surrounding whitespace.
    ///
    /// ## Example
    /// ```rust
    /// use promo_core::constraint::Constraint;
    ///
    /// assert_eq!(
    ///     Constraint::parse("156:3-8").unwrap(),
    ///     Constraint::QuantityRange { product_id: 156, min_quantity: 3, max_quantity: 8 },
    /// );
    /// ```
    pub fn parse(token: &str) -> CoreResult<Self> {
        let token = token.trim();

        let (id_part, quantity_part) = match token.split_once(':') {
            None => {
                let product_id = parse_int(token).ok_or_else(|| {
                    ConstraintError::InvalidProductId {
                        token: token.to_string(),
                    }
                })?;
                return Ok(Constraint::Any { product_id });
            }
            Some(parts) => parts,
        };

        match quantity_part.split_once('-') {
            // ProductId:Quantity
            None => {
                let invalid = || ConstraintError::InvalidQuantity {
                    token: token.to_string(),
                };
                let product_id = parse_int(id_part).ok_or_else(invalid)?;
                let quantity = parse_int(quantity_part).ok_or_else(invalid)?;
                Ok(Constraint::ExactQuantity {
                    product_id,
                    quantity,
                })
            }
            // ProductId:Min-Max
            Some((min_part, max_part)) => {
                let invalid = || ConstraintError::InvalidRange {
                    token: token.to_string(),
                };
                let product_id = parse_int(id_part).ok_or_else(invalid)?;
                let min_quantity = parse_int(min_part).ok_or_else(invalid)?;
                let max_quantity = parse_int(max_part).ok_or_else(invalid)?;
                Ok(Constraint::QuantityRange {
                    product_id,
                    min_quantity,
                    max_quantity,
                })
            }
        }
    }

    /// Checks whether one aggregated cart line satisfies this constraint.
    pub fn matches(&self, line: &CartLine) -> bool {
        match *self {
            Constraint::Any { product_id } => line.product_id == product_id,
            Constraint::ExactQuantity {
                product_id,
                quantity,
            } => line.product_id == product_id && line.total_quantity == quantity,
            Constraint::QuantityRange {
                product_id,
                min_quantity,
                max_quantity,
            } => {
                line.product_id == product_id
                    && line.total_quantity >= min_quantity
                    && line.total_quantity <= max_quantity
            }
        }
    }
}

/// Parses an integer part, tolerating surrounding whitespace.
fn parse_int(part: &str) -> Option<i64> {
    part.trim().parse().ok()
}

// =============================================================================
// Evaluation
// =============================================================================

/// Evaluates a restricted-product configuration string against
/// aggregated cart lines.
///
/// ## Rules
/// - Tokens are comma-separated; blank tokens are dropped
/// - No usable tokens at all: the restriction fails
/// - Tokens are tried in order; the first match wins
/// - An unparsable bare product id skips that token only
/// - An unparsable quantity or range aborts everything, including
///   later tokens that would have matched
///
/// Callers handle the blank-configuration case before calling: an empty
/// or all-whitespace configuration means no restriction is defined and
/// the requirement passes without evaluation.
///
/// ## Example
/// ```rust
/// use promo_core::cart::CartLine;
/// use promo_core::constraint::evaluate;
///
/// let lines = vec![CartLine { product_id: 123, total_quantity: 2 }];
///
/// assert!(evaluate("123:2", &lines));
/// assert!(!evaluate("123:3", &lines));
///
/// // The malformed quantity aborts before "123" is ever tried
/// assert!(!evaluate("77:abc, 123", &lines));
/// ```
pub fn evaluate(config: &str, lines: &[CartLine]) -> bool {
    let tokens: Vec<&str> = config
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return false;
    }

    for token in tokens {
        let constraint = match Constraint::parse(token) {
            Ok(constraint) => constraint,
            Err(err) if err.is_fatal() => return false,
            Err(_) => continue,
        };

        if lines.iter().any(|line| constraint.matches(line)) {
            return true;
        }
    }

    false
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: i64, total_quantity: i64) -> CartLine {
        CartLine {
            product_id,
            total_quantity,
        }
    }

    // -------------------------------------------------------------------------
    // Parsing
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_bare_product_id() {
        assert_eq!(
            Constraint::parse("77").unwrap(),
            Constraint::Any { product_id: 77 }
        );
        assert_eq!(
            Constraint::parse("  77  ").unwrap(),
            Constraint::Any { product_id: 77 }
        );
    }

    #[test]
    fn test_parse_exact_quantity() {
        assert_eq!(
            Constraint::parse("123:2").unwrap(),
            Constraint::ExactQuantity {
                product_id: 123,
                quantity: 2,
            }
        );
        // Parts tolerate whitespace around the separator
        assert_eq!(
            Constraint::parse("123 : 2").unwrap(),
            Constraint::ExactQuantity {
                product_id: 123,
                quantity: 2,
            }
        );
    }

    #[test]
    fn test_parse_quantity_range() {
        assert_eq!(
            Constraint::parse("156:3-8").unwrap(),
            Constraint::QuantityRange {
                product_id: 156,
                min_quantity: 3,
                max_quantity: 8,
            }
        );
    }

    #[test]
    fn test_parse_bad_bare_token_is_tolerated() {
        let err = Constraint::parse("abc").unwrap_err();
        assert_eq!(
            err,
            ConstraintError::InvalidProductId {
                token: "abc".to_string(),
            }
        );
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_parse_bad_quantity_is_fatal() {
        let err = Constraint::parse("77:abc").unwrap_err();
        assert_eq!(
            err,
            ConstraintError::InvalidQuantity {
                token: "77:abc".to_string(),
            }
        );
        assert!(err.is_fatal());

        // A bad product id in the two-part form is fatal too
        assert!(Constraint::parse("abc:2").unwrap_err().is_fatal());
    }

    #[test]
    fn test_parse_bad_range_is_fatal() {
        assert!(Constraint::parse("156:3-x").unwrap_err().is_fatal());
        assert!(Constraint::parse("156:x-8").unwrap_err().is_fatal());
        assert!(Constraint::parse("x:3-8").unwrap_err().is_fatal());
    }

    // -------------------------------------------------------------------------
    // Matching
    // -------------------------------------------------------------------------

    #[test]
    fn test_any_matches_regardless_of_quantity() {
        let constraint = Constraint::Any { product_id: 77 };
        assert!(constraint.matches(&line(77, 1)));
        assert!(constraint.matches(&line(77, 999)));
        assert!(!constraint.matches(&line(78, 1)));
    }

    #[test]
    fn test_exact_quantity_requires_exact_total() {
        let constraint = Constraint::ExactQuantity {
            product_id: 123,
            quantity: 2,
        };
        assert!(constraint.matches(&line(123, 2)));
        assert!(!constraint.matches(&line(123, 3)));
        assert!(!constraint.matches(&line(124, 2)));
    }

    #[test]
    fn test_range_is_inclusive_both_ends() {
        let constraint = Constraint::QuantityRange {
            product_id: 156,
            min_quantity: 3,
            max_quantity: 8,
        };
        assert!(constraint.matches(&line(156, 3)));
        assert!(constraint.matches(&line(156, 5)));
        assert!(constraint.matches(&line(156, 8)));
        assert!(!constraint.matches(&line(156, 2)));
        assert!(!constraint.matches(&line(156, 9)));
    }

    #[test]
    fn test_reversed_range_never_matches() {
        let constraint = Constraint::QuantityRange {
            product_id: 10,
            min_quantity: 8,
            max_quantity: 3,
        };
        for quantity in 0..12 {
            assert!(!constraint.matches(&line(10, quantity)));
        }
    }

    // -------------------------------------------------------------------------
    // Evaluation
    // -------------------------------------------------------------------------

    #[test]
    fn test_evaluate_first_matching_token_wins() {
        let lines = vec![line(77, 2)];
        assert!(evaluate("77", &lines));
        assert!(evaluate("123:2, 77", &lines));
    }

    #[test]
    fn test_evaluate_no_usable_tokens_fails() {
        let lines = vec![line(77, 2)];
        assert!(!evaluate(",,,", &lines));
        assert!(!evaluate(" , ", &lines));
    }

    #[test]
    fn test_evaluate_skips_bad_bare_token() {
        // "abc" is dropped, "77" still matches
        let lines = vec![line(77, 2)];
        assert!(evaluate("abc, 77", &lines));

        // "abc" alone never matches anything
        assert!(!evaluate("abc", &lines));
    }

    #[test]
    fn test_evaluate_aborts_on_bad_quantity_token() {
        // Product 123 is in the cart, but the malformed token before it
        // discards the rest of the list
        let lines = vec![line(123, 1)];
        assert!(!evaluate("77:abc, 123", &lines));
        assert!(!evaluate("77:1-x, 123", &lines));
    }

    #[test]
    fn test_evaluate_reversed_range() {
        let lines = vec![line(10, 5)];
        assert!(!evaluate("10:8-3", &lines));
    }

    #[test]
    fn test_evaluate_empty_cart() {
        assert!(!evaluate("77, 123:2", &[]));
    }
}
