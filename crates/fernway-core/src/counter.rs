//! # Counter
//!
//! A standalone non-negative counter.
//!
//! This is the degenerate cousin of the cart: a single integer with
//! `increment`/`decrement` instead of line items. It is deliberately a
//! separate type - a bare counter and a product cart share a pattern, not
//! an implementation.

use serde::{Deserialize, Serialize};

/// A counter that never goes below zero.
///
/// ## Invariant
/// `value >= 0` at all times; `decrement` on a zero counter stays at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    value: i64,
}

impl Counter {
    /// Creates a counter at zero.
    pub const fn new() -> Self {
        Counter { value: 0 }
    }

    /// Returns the current value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Increments by one.
    pub fn increment(&mut self) {
        self.value += 1;
    }

    /// Decrements by one, floored at zero.
    pub fn decrement(&mut self) {
        self.value = (self.value - 1).max(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(Counter::new().value(), 0);
        assert_eq!(Counter::default().value(), 0);
    }

    #[test]
    fn test_increment_decrement() {
        let mut counter = Counter::new();
        counter.increment();
        counter.increment();
        counter.increment();
        assert_eq!(counter.value(), 3);

        counter.decrement();
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn test_decrement_floors_at_zero() {
        let mut counter = Counter::new();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.value(), 0);

        counter.increment();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.value(), 0);
    }
}
