//! # Quantity Selector
//!
//! Per-key quantity cells used by the UI to pick an amount before calling
//! the cart's `add`.
//!
//! ## Usage Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Product detail page for "monstera-deliciosa"                       │
//! │                                                                     │
//! │  Qty: [ - ] 3 [ + ]     [ Add to cart ]                             │
//! │         │                    │                                       │
//! │         │                    └─► cart.add(product, selector.get(k)) │
//! │         │                        selector.reset(k)                  │
//! │         └─► selector cell for key k, created at 1 on first access   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries are never evicted. Acceptable only because keys come from a
//! small, bounded catalog; an unbounded key space would need per-session
//! scoping or an eviction policy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::validate_quantity;

/// Default quantity for a cell that has never been set.
const DEFAULT_QUANTITY: i64 = 1;

/// Keyed map of independent positive-integer quantities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuantitySelector {
    cells: HashMap<String, i64>,
}

impl QuantitySelector {
    /// Creates an empty selector.
    pub fn new() -> Self {
        QuantitySelector {
            cells: HashMap::new(),
        }
    }

    /// Returns the mutable cell for `key`, creating it at 1 if absent.
    pub fn get_or_create(&mut self, key: &str) -> &mut i64 {
        self.cells
            .entry(key.to_string())
            .or_insert(DEFAULT_QUANTITY)
    }

    /// Returns the quantity for `key` without creating a cell.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.cells.get(key).copied()
    }

    /// Sets the quantity for `key`, creating the cell if needed.
    ///
    /// Rejects non-positive and oversized values; the cell keeps its
    /// previous value on error.
    pub fn set(&mut self, key: &str, quantity: i64) -> Result<(), ValidationError> {
        validate_quantity(quantity)?;
        self.cells.insert(key.to_string(), quantity);
        Ok(())
    }

    /// Resets the cell for `key` back to 1 if it exists.
    ///
    /// A reset of an unknown key is a no-op and must not create an entry.
    pub fn reset(&mut self, key: &str) {
        if let Some(cell) = self.cells.get_mut(key) {
            *cell = DEFAULT_QUANTITY;
        }
    }

    /// Number of cells created so far.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Checks if no cells have been created.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_access_defaults_to_one() {
        let mut selector = QuantitySelector::new();
        assert_eq!(*selector.get_or_create("x"), 1);
    }

    #[test]
    fn test_cells_are_independent() {
        let mut selector = QuantitySelector::new();
        *selector.get_or_create("a") = 5;
        *selector.get_or_create("b") = 2;

        assert_eq!(selector.get("a"), Some(5));
        assert_eq!(selector.get("b"), Some(2));
        assert_eq!(selector.len(), 2);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut selector = QuantitySelector::new();
        *selector.get_or_create("x") = 7;

        selector.reset("x");
        assert_eq!(*selector.get_or_create("x"), 1);
    }

    #[test]
    fn test_reset_unknown_key_creates_nothing() {
        let mut selector = QuantitySelector::new();
        selector.reset("y");

        assert!(selector.is_empty());
        assert_eq!(selector.get("y"), None);
    }

    #[test]
    fn test_set_validates() {
        let mut selector = QuantitySelector::new();
        assert!(selector.set("x", 3).is_ok());
        assert_eq!(selector.get("x"), Some(3));

        assert!(selector.set("x", 0).is_err());
        assert!(selector.set("x", -2).is_err());
        assert!(selector.set("x", 10_000).is_err());
        // A rejected set leaves the cell untouched
        assert_eq!(selector.get("x"), Some(3));
    }
}
