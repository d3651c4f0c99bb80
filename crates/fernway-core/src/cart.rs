//! # Cart
//!
//! The shopping cart and its line items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                  │
//! │                                                                     │
//! │  UI Action               Operation             State Change         │
//! │  ─────────               ─────────             ────────────         │
//! │                                                                     │
//! │  Click "Add to cart" ──► add_item() ─────────► merge or append      │
//! │                                                                     │
//! │  Click Remove ─────────► remove_item() ──────► items.retain(..)     │
//! │                                                                     │
//! │  Click Clear ──────────► clear() ────────────► items.clear()        │
//! │                                                                     │
//! │  Render totals ────────► total()/quantity() ─► (read only)          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{validate_product, validate_quantity};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Line Item
// =============================================================================

/// An item in the shopping cart: a product snapshot plus a count.
///
/// ## Snapshot Pattern
/// Every display field is a frozen copy of the product at the moment it was
/// first added. If the catalog row changes afterwards, the cart keeps
/// showing (and charging) what the shopper saw. Merging a repeat add only
/// ever touches `count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product ID (UUID) - the merge key, unique within a cart.
    pub product_id: String,

    /// Slug at time of adding (frozen).
    pub slug: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Image URL at time of adding (frozen).
    pub image_url: Option<String>,

    /// Unit price in cents at time of adding (frozen).
    /// The price is locked in when the item enters the cart.
    pub unit_price_cents: i64,

    /// Quantity in cart. Invariant: `count >= 1` while the item exists;
    /// an item whose count would reach 0 is removed instead.
    pub count: i64,

    /// When this item was first added to the cart.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a new line item from a product and quantity.
    pub fn from_product(product: &Product, count: i64) -> Self {
        LineItem {
            product_id: product.id.clone(),
            slug: product.slug.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            unit_price_cents: product.price_cents,
            count,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (unit price × count).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.count
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product merges counts)
/// - Every item has `count >= 1`
/// - Insertion order is preserved; merging does not move an item
/// - Maximum unique items: [`MAX_CART_ITEMS`]
/// - Maximum count per item: [`MAX_ITEM_QUANTITY`]
///
/// ## Lifecycle
/// Created empty, lives only in memory, discarded on restart. Nothing
/// outside this module mutates a `LineItem` once it is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart, in insertion order.
    pub items: Vec<LineItem>,

    /// When the cart was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart or merges into an existing line item.
    ///
    /// ## Behavior
    /// - Validates the product (non-empty id, non-negative price) and the
    ///   quantity (positive, within limits) before touching any state
    /// - If the product is already in the cart: increments `count` only;
    ///   all other fields keep the originally stored snapshot, not the
    ///   fields of the `product` argument
    /// - Otherwise: appends a new line item snapshot with `count = quantity`
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_product(product)?;
        validate_quantity(quantity)?;

        // Merge into an existing line item, preserving its position
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_count = item.count + quantity;
            if new_count > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_count,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.count = new_count;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(LineItem::from_product(product, quantity));
        Ok(())
    }

    /// Removes the line item with the given product id.
    ///
    /// Removing an id that is not in the cart is a no-op, not an error.
    ///
    /// ## Returns
    /// `true` if an item was removed, `false` if nothing matched.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != initial_len
    }

    /// Clears all items from the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of unique line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total number of items: Σ count over all line items.
    ///
    /// Recomputed from the current contents on every call; there is no
    /// cached state to fall out of sync.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.count).sum()
    }

    /// Total price: Σ (unit price × count) over all line items.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Money::zero(), |sum, line| sum + line)
    }

    /// Total price in cents.
    pub fn total_cents(&self) -> i64 {
        self.total().cents()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived aggregates of a cart, computed from its current contents.
///
/// Built from `&Cart` in one pass so the two aggregates always describe
/// the same item sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Σ (unit price × count) in cents.
    pub total_cents: i64,

    /// Σ count over all line items.
    pub total_quantity: i64,

    /// Number of unique line items.
    pub item_count: usize,
}

impl CartTotals {
    /// Totals of an empty cart.
    pub fn empty() -> Self {
        CartTotals {
            total_cents: 0,
            total_quantity: 0,
            item_count: 0,
        }
    }

    /// Total price as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            total_cents: cart.total_cents(),
            total_quantity: cart.total_quantity(),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64) -> Product {
        let now = Utc::now();
        Product {
            id: id.to_string(),
            slug: format!("plant-{}", id),
            name: format!("Plant {}", id),
            description: None,
            image_url: Some(format!("/images/{}.jpg", id)),
            price_cents,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000); // $10.00

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total_cents(), 2000); // $20.00
    }

    #[test]
    fn test_add_same_product_merges_counts() {
        let mut cart = Cart::new();
        let product = test_product("1", 1000);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        assert_eq!(cart.item_count(), 1); // Still one unique item
        assert_eq!(cart.items[0].count, 5);
        assert_eq!(cart.total_cents(), 5000);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_merge_preserves_original_snapshot() {
        let mut cart = Cart::new();
        let original = test_product("1", 1000);
        cart.add_item(&original, 1).unwrap();

        // Same id, different display fields and price: the stored snapshot
        // must win everywhere except the count
        let mut changed = test_product("1", 9999);
        changed.name = "Renamed Plant".to_string();
        changed.slug = "renamed".to_string();
        cart.add_item(&changed, 2).unwrap();

        let item = &cart.items[0];
        assert_eq!(item.count, 3);
        assert_eq!(item.unit_price_cents, 1000);
        assert_eq!(item.name, "Plant 1");
        assert_eq!(item.slug, "plant-1");
    }

    #[test]
    fn test_merge_preserves_position() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("a", 100), 1).unwrap();
        cart.add_item(&test_product("b", 200), 1).unwrap();
        cart.add_item(&test_product("c", 300), 1).unwrap();

        cart.add_item(&test_product("a", 100), 1).unwrap();

        let order: Vec<&str> = cart.items.iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert_eq!(cart.items[0].count, 2);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut cart = Cart::new();

        // Non-positive quantity
        assert!(cart.add_item(&test_product("1", 1000), 0).is_err());
        assert!(cart.add_item(&test_product("1", 1000), -3).is_err());

        // Missing id / price out of range
        assert!(cart.add_item(&test_product("", 1000), 1).is_err());
        assert!(cart.add_item(&test_product("1", -1), 1).is_err());
        assert!(cart.add_item(&test_product("1", i64::MAX), 1).is_err());

        // Failed adds leave the cart untouched
        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
    }

    #[test]
    fn test_add_enforces_quantity_cap() {
        let mut cart = Cart::new();
        let product = test_product("1", 100);

        cart.add_item(&product, 999).unwrap();
        let err = cart.add_item(&product, 1).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { .. }));
        assert_eq!(cart.items[0].count, 999);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 1000), 2).unwrap();
        cart.add_item(&test_product("2", 500), 1).unwrap();

        assert!(cart.remove_item("1"));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].product_id, "2");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 1000), 2).unwrap();

        assert!(cart.remove_item("1"));
        assert!(!cart.remove_item("1")); // Second remove is a no-op
        assert!(!cart.remove_item("never-added"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_resets_totals() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 1000), 2).unwrap();
        cart.add_item(&test_product("2", 500), 3).unwrap();
        assert!(!cart.is_empty());

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_totals_scenario() {
        // add {id:1, price:$10} qty 2 → total $20, count 2
        // add {id:1, price:$10} qty 3 → count 5, total $50
        // remove(1) → empty, totals 0
        let mut cart = Cart::new();
        let product = test_product("1", 1000);

        cart.add_item(&product, 2).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].count, 2);
        assert_eq!(cart.total_cents(), 2000);
        assert_eq!(cart.total_quantity(), 2);

        cart.add_item(&product, 3).unwrap();
        assert_eq!(cart.items[0].count, 5);
        assert_eq!(cart.total_cents(), 5000);
        assert_eq!(cart.total_quantity(), 5);

        cart.remove_item("1");
        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_cart_totals_from_cart() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 250), 4).unwrap();

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.total_cents, 1000);
        assert_eq!(totals.total_quantity, 4);
        assert_eq!(totals.item_count, 1);
        assert_eq!(totals.total(), Money::from_cents(1000));
    }
}
