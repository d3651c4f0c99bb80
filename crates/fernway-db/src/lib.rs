//! # fernway-db: Database Layer for the Fernway Storefront
//!
//! This crate provides catalog access for the storefront. It uses SQLite
//! for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Fernway Data Flow                               │
//! │                                                                     │
//! │  Page loader (load_home_page)                                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  fernway-db (THIS CRATE)                      │  │
//! │  │                                                               │  │
//! │  │   ┌─────────────┐   ┌──────────────┐   ┌──────────────┐      │  │
//! │  │   │  Database   │   │ Repositories │   │  Migrations  │      │  │
//! │  │   │  (pool.rs)  │◄──│ (product.rs) │   │  (embedded)  │      │  │
//! │  │   └─────────────┘   └──────────────┘   └──────────────┘      │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (WAL mode)                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fernway_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/fernway.db")).await?;
//! let products = db.products().list().await?;
//! let fern = db.products().get_by_slug("boston-fern").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
