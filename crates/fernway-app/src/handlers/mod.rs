//! # Handlers Module
//!
//! UI-facing operations, grouped by concern.
//!
//! ```text
//! handlers/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Catalog listing and lookup
//! ├── cart.rs      ◄─── Cart manipulation
//! └── quantity.rs  ◄─── Per-product quantity selection
//! ```
//!
//! Each handler takes exactly the state it needs as arguments and
//! returns `Result<T, AppError>` (or a plain value when it cannot fail).

pub mod cart;
pub mod product;
pub mod quantity;

pub use cart::{add_to_cart, clear_cart, get_cart, remove_from_cart, CartView};
pub use product::{get_product_by_slug, list_products, ProductDto};
pub use quantity::{get_quantity, reset_quantity, set_quantity};
