//! # fernway-core: Pure Business Logic for the Fernway Storefront
//!
//! This crate is the heart of the storefront. It contains all client-side
//! state logic as pure, I/O-free code.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Fernway Architecture                            │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                   Rendering Layer (UI)                        │  │
//! │  │    Product Grid ──► Quantity Picker ──► Cart Panel            │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │ fernway-app handlers               │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │               ★ fernway-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐           │  │
//! │  │   │  types  │ │  money  │ │  cart   │ │ quantity │           │  │
//! │  │   │ Product │ │  Money  │ │  Cart   │ │ Selector │           │  │
//! │  │   └─────────┘ └─────────┘ │  Store  │ └──────────┘           │  │
//! │  │                           └─────────┘                        │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                          │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                fernway-db (Product Catalog)                   │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and line-item logic with derived totals
//! - [`store`] - Reactive cart store (observer list + snapshots)
//! - [`counter`] - Standalone non-negative counter
//! - [`quantity`] - Per-key quantity selector
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure state**: every mutation is a function of the previous state
//! 2. **No I/O**: database and network access is forbidden here
//! 3. **Integer money**: all monetary values are cents (i64)
//! 4. **Explicit errors**: typed errors, never strings or panics
//! 5. **Consistent snapshots**: an observer only ever sees a cart whose
//!    derived totals were computed from the same items it was handed

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod counter;
pub mod error;
pub mod money;
pub mod quantity;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fernway_core::Money` instead of
// `use fernway_core::money::Money`

pub use cart::{Cart, CartTotals, LineItem};
pub use counter::Counter;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use quantity::QuantitySelector;
pub use store::{CartSnapshot, CartStore, SubscriptionId};
pub use types::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum unique line items allowed in a single cart.
///
/// Keeps a runaway cart from growing without bound; generous relative to
/// the size of the catalog it fronts.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line item.
///
/// Guards against an accidental over-order (typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum unit price in cents ($1,000,000.00).
///
/// Bounds line totals: `MAX_PRICE_CENTS * MAX_ITEM_QUANTITY * MAX_CART_ITEMS`
/// stays far below `i64::MAX`, so cart arithmetic cannot overflow.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;
