//! # Cart Handlers
//!
//! Operations for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │                        │
//! │  │  Cart    │     │          │     │  (later) │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::state::DbState;
use fernway_core::{CartSnapshot, CartStore, CartTotals, LineItem};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

impl From<CartSnapshot> for CartView {
    fn from(snapshot: CartSnapshot) -> Self {
        CartView {
            items: snapshot.items,
            totals: snapshot.totals,
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and calculated totals
pub fn get_cart(cart: &CartStore) -> CartView {
    debug!("get_cart");
    CartView::from(cart.snapshot())
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added as new item
/// - Price is "frozen" at time of adding (won't change if product price updates)
///
/// ## Arguments
/// * `product_id` - Product UUID to add
/// * `quantity` - Quantity to add (default: 1)
///
/// ## Returns
/// Updated cart with all items and totals
pub async fn add_to_cart(
    db: &DbState,
    cart: &CartStore,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartView, AppError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart");

    // Fetch the product for the price/name snapshot frozen into the line item
    let product = db
        .inner()
        .products()
        .get_by_id(product_id)
        .await?
        .ok_or_else(|| AppError::not_found("Product", product_id))?;

    let snapshot = cart.add(&product, quantity)?;
    Ok(CartView::from(snapshot))
}

/// Removes an item from the cart.
///
/// Removing a product that is not in the cart is a no-op.
///
/// ## Arguments
/// * `product_id` - Product UUID to remove
///
/// ## Returns
/// Updated cart
pub fn remove_from_cart(cart: &CartStore, product_id: &str) -> CartView {
    debug!(product_id = %product_id, "remove_from_cart");
    CartView::from(cart.remove(product_id))
}

/// Clears all items from the cart.
///
/// ## When Used
/// - User empties the cart from the cart page
/// - After checkout completes (new session)
///
/// ## Returns
/// Empty cart
pub fn clear_cart(cart: &CartStore) -> CartView {
    debug!("clear_cart");
    CartView::from(cart.clear())
}
