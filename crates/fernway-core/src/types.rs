//! # Domain Types
//!
//! Core domain types for the Fernway storefront.
//!
//! ## Dual-Key Identity Pattern
//! Every product has:
//! - `id`: UUID v4 - immutable, used for database relations and cart merging
//! - `slug`: URL key - human-readable, used by product detail routes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
///
/// The cart never holds a `Product` directly; it copies the fields it needs
/// into a [`crate::cart::LineItem`] snapshot at add time, so later catalog
/// edits cannot reach into an open cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// URL slug - business identifier, unique across the catalog.
    pub slug: String,

    /// Display name shown in the grid and on the detail page.
    pub name: String,

    /// Optional long description for the detail page.
    pub description: Option<String>,

    /// Optional image URL.
    pub image_url: Option<String>,

    /// Unit price in cents (smallest currency unit), non-negative.
    pub price_cents: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        let now = Utc::now();
        Product {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            slug: "monstera-deliciosa".to_string(),
            name: "Monstera Deliciosa".to_string(),
            description: Some("Swiss cheese plant, 6\" pot".to_string()),
            image_url: None,
            price_cents: 2499,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_price_as_money() {
        let product = sample_product();
        assert_eq!(product.price(), Money::from_cents(2499));
    }

    #[test]
    fn test_serde_round_trip() {
        let product = sample_product();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, product.id);
        assert_eq!(back.price_cents, product.price_cents);
    }
}
