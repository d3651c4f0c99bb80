//! # Quantity Selector State
//!
//! Shared, thread-safe wrapper around the per-product quantity selector.
//!
//! ## Thread Safety
//! `QuantitySelector` is a plain map. Handlers run concurrently, so the
//! selector lives behind a `Mutex` and handlers use the `with_selector*`
//! helpers for exclusive access. Lock hold times are tiny (map lookups),
//! so a `Mutex` is preferable to the complexity of finer-grained locking.

use std::sync::Mutex;

use fernway_core::QuantitySelector;

/// Shared quantity selector, protected by a mutex.
#[derive(Debug, Default)]
pub struct SelectorState {
    selector: Mutex<QuantitySelector>,
}

impl SelectorState {
    /// Creates a new state with no quantity cells.
    pub fn new() -> Self {
        SelectorState {
            selector: Mutex::new(QuantitySelector::new()),
        }
    }

    /// Executes a closure with read access to the selector.
    pub fn with_selector<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&QuantitySelector) -> R,
    {
        let selector = self.selector.lock().expect("selector mutex poisoned");
        f(&selector)
    }

    /// Executes a closure with mutable access to the selector.
    pub fn with_selector_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut QuantitySelector) -> R,
    {
        let mut selector = self.selector.lock().expect("selector mutex poisoned");
        f(&mut selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_through_state() {
        let state = SelectorState::new();
        let qty = state.with_selector_mut(|s| *s.get_or_create("fern"));
        assert_eq!(qty, 1);
    }

    #[test]
    fn test_mutation_is_visible_across_calls() {
        let state = SelectorState::new();
        state.with_selector_mut(|s| s.set("fern", 4).unwrap());
        assert_eq!(state.with_selector(|s| s.get("fern")), Some(4));
    }
}
