//! # Product Handlers
//!
//! Operations for catalog listing and lookup.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Lookup Flow                                  │
//! │                                                                         │
//! │  /products                       /products/boston-fern                  │
//! │       │                                │                                │
//! │       ▼                                ▼                                │
//! │  list_products()                 get_product_by_slug("boston-fern")     │
//! │       │                                │                                │
//! │       ▼                                ▼                                │
//! │  SELECT ... ORDER BY id          SELECT ... WHERE slug = ?              │
//! │       │                                │                                │
//! │       ▼                                ▼                                │
//! │  Vec<ProductDto>                 ProductDto (or NOT_FOUND)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::state::DbState;
use fernway_core::{validation::validate_slug, Product};

/// Product DTO (Data Transfer Object) for the UI.
///
/// ## Why DTO?
/// - Decouples internal domain model from API contract
/// - Allows selective field exposure (timestamps stay internal)
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price_cents: i64,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            slug: p.slug,
            name: p.name,
            description: p.description,
            image_url: p.image_url,
            price_cents: p.price_cents,
        }
    }
}

/// Lists the whole catalog, ordered by id.
///
/// ## Returns
/// All products as DTOs, in a stable order between calls
pub async fn list_products(db: &DbState) -> Result<Vec<ProductDto>, AppError> {
    debug!("list_products");

    let products = db.inner().products().list().await?;
    Ok(products.into_iter().map(ProductDto::from).collect())
}

/// Looks up a single product by its URL slug.
///
/// ## Arguments
/// * `slug` - URL slug, e.g. "boston-fern"
///
/// ## Errors
/// - `VALIDATION_ERROR` if the slug is malformed
/// - `NOT_FOUND` if no product has that slug
pub async fn get_product_by_slug(db: &DbState, slug: &str) -> Result<ProductDto, AppError> {
    debug!(slug = %slug, "get_product_by_slug");

    validate_slug(slug)?;

    let product = db
        .inner()
        .products()
        .get_by_slug(slug)
        .await?
        .ok_or_else(|| AppError::not_found("Product", slug))?;

    Ok(ProductDto::from(product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use fernway_db::repository::product::new_product;
    use fernway_db::{Database, DbConfig};

    async fn seeded_db() -> DbState {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        for (slug, name, cents) in [
            ("boston-fern", "Boston Fern", 1899),
            ("golden-pothos", "Golden Pothos", 1299),
        ] {
            let product = new_product(slug, name, None, None, cents);
            db.products().insert(&product).await.unwrap();
        }
        DbState::new(db)
    }

    #[tokio::test]
    async fn test_list_products_returns_catalog() {
        let db = seeded_db().await;
        let products = list_products(&db).await.unwrap();
        assert_eq!(products.len(), 2);

        // Stable ordering by id
        let mut ids: Vec<String> = products.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        assert_eq!(ids, products.iter().map(|p| p.id.clone()).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_get_product_by_slug() {
        let db = seeded_db().await;
        let product = get_product_by_slug(&db, "boston-fern").await.unwrap();
        assert_eq!(product.name, "Boston Fern");
        assert_eq!(product.price_cents, 1899);
    }

    #[tokio::test]
    async fn test_get_product_unknown_slug_is_not_found() {
        let db = seeded_db().await;
        let err = get_product_by_slug(&db, "venus-flytrap").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_get_product_rejects_malformed_slug() {
        let db = seeded_db().await;
        let err = get_product_by_slug(&db, "Boston Fern!").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
