//! # Quantity Handlers
//!
//! Operations for per-product quantity selection.
//!
//! ## Usage Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product detail page                                                    │
//! │                                                                         │
//! │  Qty: [ - ] 3 [ + ]     [ Add to cart ]                                 │
//! │         │                     │                                         │
//! │    set_quantity          qty = get_quantity(...)                        │
//! │                          add_to_cart(..., Some(qty))                    │
//! │                          reset_quantity(...)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity cells are UI state, not cart state: they track what the user
//! would add next, and resetting one never touches the cart.

use tracing::debug;

use crate::error::AppError;
use crate::state::SelectorState;

/// Gets the selected quantity for a product, creating the cell at 1 on
/// first access.
///
/// ## Arguments
/// * `product_id` - Product whose quantity cell to read
pub fn get_quantity(selector: &SelectorState, product_id: &str) -> i64 {
    debug!(product_id = %product_id, "get_quantity");
    selector.with_selector_mut(|s| *s.get_or_create(product_id))
}

/// Sets the selected quantity for a product.
///
/// ## Errors
/// Rejects non-positive and oversized values; the cell keeps its
/// previous value on error.
pub fn set_quantity(
    selector: &SelectorState,
    product_id: &str,
    quantity: i64,
) -> Result<i64, AppError> {
    debug!(product_id = %product_id, quantity = %quantity, "set_quantity");
    selector.with_selector_mut(|s| {
        s.set(product_id, quantity)?;
        Ok(quantity)
    })
}

/// Resets a product's quantity cell back to 1.
///
/// Called after a successful add-to-cart. Resetting a cell that was
/// never created is a no-op.
pub fn reset_quantity(selector: &SelectorState, product_id: &str) {
    debug!(product_id = %product_id, "reset_quantity");
    selector.with_selector_mut(|s| s.reset(product_id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_first_read_defaults_to_one() {
        let selector = SelectorState::new();
        assert_eq!(get_quantity(&selector, "fern"), 1);
    }

    #[test]
    fn test_set_then_get() {
        let selector = SelectorState::new();
        set_quantity(&selector, "fern", 4).unwrap();
        assert_eq!(get_quantity(&selector, "fern"), 4);
        // Other products are unaffected
        assert_eq!(get_quantity(&selector, "pothos"), 1);
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let selector = SelectorState::new();
        set_quantity(&selector, "fern", 4).unwrap();

        let err = set_quantity(&selector, "fern", 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(set_quantity(&selector, "fern", -3).is_err());

        assert_eq!(get_quantity(&selector, "fern"), 4);
    }

    #[test]
    fn test_reset_restores_default() {
        let selector = SelectorState::new();
        set_quantity(&selector, "fern", 9).unwrap();
        reset_quantity(&selector, "fern");
        assert_eq!(get_quantity(&selector, "fern"), 1);
    }
}
