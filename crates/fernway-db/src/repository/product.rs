//! # Product Repository
//!
//! Database operations for the product catalog. This is the storefront's
//! data-loading collaborator: the cart never talks to it directly, it only
//! consumes the `Product` records loaded here.
//!
//! ## Key Operations
//! - `list` - the full catalog, ordered by id
//! - `get_by_slug` - single product for the detail route
//! - `count` - catalog size
//! - `insert` - seeding and tests

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use fernway_core::Product;

/// Columns selected for every `Product` row.
const PRODUCT_COLUMNS: &str =
    "id, slug, name, description, image_url, price_cents, created_at, updated_at";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let all = repo.list().await?;
/// let fern = repo.get_by_slug("boston-fern").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists the whole catalog.
    ///
    /// Rows are ordered by `id` ascending: the backend returns rows in an
    /// arbitrary order otherwise, and the grid should be stable between
    /// loads.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        debug!("Listing products");

        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id ASC");
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Loaded products");
        Ok(products)
    }

    /// Gets a product by its URL slug.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - product found
    /// * `Ok(None)` - no row matches the slug
    pub async fn get_by_slug(&self, slug: &str) -> DbResult<Option<Product>> {
        debug!(slug = %slug, "Loading product by slug");

        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = ?1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - product found
    /// * `Ok(None)` - product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Counts catalog rows.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(())` - inserted
    /// * `Err(DbError::UniqueViolation)` - slug already exists
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(slug = %product.slug, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (
                id, slug, name, description, image_url,
                price_cents, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&product.id)
        .bind(&product.slug)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.image_url)
        .bind(product.price_cents)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Helper to generate a new product ID.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

/// Builds a `Product` with fresh id and timestamps.
///
/// ## Usage
/// Seeding and tests; the storefront itself never creates products.
pub fn new_product(
    slug: &str,
    name: &str,
    description: Option<&str>,
    image_url: Option<&str>,
    price_cents: i64,
) -> Product {
    let now = Utc::now();
    Product {
        id: generate_product_id(),
        slug: slug.to_string(),
        name: name.to_string(),
        description: description.map(str::to_string),
        image_url: image_url.map(str::to_string),
        price_cents,
        created_at: now,
        updated_at: now,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_list() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&new_product("boston-fern", "Boston Fern", None, None, 1899))
            .await
            .unwrap();
        repo.insert(&new_product("golden-pothos", "Golden Pothos", None, None, 1299))
            .await
            .unwrap();

        let products = repo.list().await.unwrap();
        assert_eq!(products.len(), 2);

        // Ordered by id ascending
        let mut ids: Vec<String> = products.iter().map(|p| p.id.clone()).collect();
        let sorted = {
            let mut s = ids.clone();
            s.sort();
            s
        };
        assert_eq!(ids, sorted);
        ids.dedup();
        assert_eq!(ids.len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_slug() {
        let db = test_db().await;
        let repo = db.products();

        let product = new_product(
            "snake-plant",
            "Snake Plant",
            Some("Near-indestructible"),
            Some("/images/snake-plant.jpg"),
            2499,
        );
        repo.insert(&product).await.unwrap();

        let found = repo.get_by_slug("snake-plant").await.unwrap().unwrap();
        assert_eq!(found.id, product.id);
        assert_eq!(found.name, "Snake Plant");
        assert_eq!(found.price_cents, 2499);
        assert_eq!(found.description.as_deref(), Some("Near-indestructible"));

        let missing = repo.get_by_slug("no-such-plant").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = test_db().await;
        let repo = db.products();

        let product = new_product("zz-plant", "ZZ Plant", None, None, 2199);
        repo.insert(&product).await.unwrap();

        let found = repo.get_by_id(&product.id).await.unwrap().unwrap();
        assert_eq!(found.slug, "zz-plant");

        assert!(repo.get_by_id("missing-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_count() {
        let db = test_db().await;
        let repo = db.products();

        assert_eq!(repo.count().await.unwrap(), 0);

        repo.insert(&new_product("a-plant", "A", None, None, 100))
            .await
            .unwrap();
        repo.insert(&new_product("b-plant", "B", None, None, 200))
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_rejected() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&new_product("monstera", "Monstera", None, None, 3499))
            .await
            .unwrap();

        let err = repo
            .insert(&new_product("monstera", "Another Monstera", None, None, 999))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }
}
