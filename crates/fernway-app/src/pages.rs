//! # Page Loaders
//!
//! Assembles the data each page of the storefront renders from.
//!
//! ## Loading Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Page Data Loading                                    │
//! │                                                                         │
//! │  Route            Loader                 Data                           │
//! │  ─────            ──────                 ────                           │
//! │  /                load_home_page    ───► full catalog, ordered by id    │
//! │  /products/:slug  load_product_page ───► one product (None if missing)  │
//! │  /cart            load_cart_page    ───► cart view + catalog count      │
//! │                                                                         │
//! │  Failures are logged and propagated as AppError; loaders never          │
//! │  retry and never serve partial data.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing product is not an error at this layer: `load_product_page`
//! returns `Ok(None)` so the route can render its own not-found state.

use serde::Serialize;
use tracing::{debug, error};

use crate::error::{AppError, ErrorCode};
use crate::handlers::cart::{get_cart, CartView};
use crate::handlers::product::{get_product_by_slug, list_products, ProductDto};
use crate::state::DbState;
use fernway_core::CartStore;

/// Data for the home page: the full product grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub products: Vec<ProductDto>,
}

/// Data for a product detail page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub product: ProductDto,
}

/// Data for the cart page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPage {
    pub cart: CartView,

    /// Total number of products in the catalog, shown as
    /// "Browse all N plants" under an empty cart.
    pub catalog_size: i64,
}

/// Loads the home page: every product, in stable id order.
pub async fn load_home_page(db: &DbState) -> Result<HomePage, AppError> {
    debug!("load_home_page");

    let products = list_products(db).await.map_err(|e| {
        error!(code = ?e.code, "Home page load failed: {}", e.message);
        e
    })?;

    Ok(HomePage { products })
}

/// Loads a product detail page by slug.
///
/// ## Returns
/// - `Ok(Some(page))` when the product exists
/// - `Ok(None)` when it doesn't, so the route can render a 404
/// - `Err` only for malformed slugs or backend failures
pub async fn load_product_page(db: &DbState, slug: &str) -> Result<Option<ProductPage>, AppError> {
    debug!(slug = %slug, "load_product_page");

    match get_product_by_slug(db, slug).await {
        Ok(product) => Ok(Some(ProductPage { product })),
        Err(e) if e.code == ErrorCode::NotFound => Ok(None),
        Err(e) => {
            error!(slug = %slug, code = ?e.code, "Product page load failed: {}", e.message);
            Err(e)
        }
    }
}

/// Loads the cart page: the current cart plus the catalog size.
pub async fn load_cart_page(db: &DbState, cart: &CartStore) -> Result<CartPage, AppError> {
    debug!("load_cart_page");

    let catalog_size = db.inner().products().count().await.map_err(|e| {
        let app_err = AppError::from(e);
        error!(code = ?app_err.code, "Cart page load failed: {}", app_err.message);
        app_err
    })?;

    Ok(CartPage {
        cart: get_cart(cart),
        catalog_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::cart::add_to_cart;
    use fernway_db::repository::product::new_product;
    use fernway_db::{Database, DbConfig};

    async fn seeded_db() -> DbState {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        for (slug, name, cents) in [
            ("boston-fern", "Boston Fern", 1899),
            ("golden-pothos", "Golden Pothos", 1299),
            ("snake-plant", "Snake Plant", 2499),
        ] {
            let product = new_product(slug, name, None, None, cents);
            db.products().insert(&product).await.unwrap();
        }
        DbState::new(db)
    }

    #[tokio::test]
    async fn test_home_page_lists_full_catalog() {
        let db = seeded_db().await;
        let page = load_home_page(&db).await.unwrap();
        assert_eq!(page.products.len(), 3);
    }

    #[tokio::test]
    async fn test_product_page_by_slug() {
        let db = seeded_db().await;
        let page = load_product_page(&db, "snake-plant").await.unwrap().unwrap();
        assert_eq!(page.product.name, "Snake Plant");
    }

    #[tokio::test]
    async fn test_product_page_missing_slug_is_none() {
        let db = seeded_db().await;
        let page = load_product_page(&db, "venus-flytrap").await.unwrap();
        assert!(page.is_none());
    }

    #[tokio::test]
    async fn test_product_page_malformed_slug_is_error() {
        let db = seeded_db().await;
        assert!(load_product_page(&db, "Not A Slug").await.is_err());
    }

    #[tokio::test]
    async fn test_cart_page_includes_catalog_size() {
        let db = seeded_db().await;
        let cart = CartStore::new();

        let page = load_cart_page(&db, &cart).await.unwrap();
        assert!(page.cart.items.is_empty());
        assert_eq!(page.catalog_size, 3);

        let fern = get_product_by_slug(&db, "boston-fern").await.unwrap();
        add_to_cart(&db, &cart, &fern.id, Some(2)).await.unwrap();

        let page = load_cart_page(&db, &cart).await.unwrap();
        assert_eq!(page.cart.items.len(), 1);
        assert_eq!(page.cart.totals.total_cents, 1899 * 2);
    }
}
