//! # Database State
//!
//! Wraps the `Database` connection for use in handlers and page loaders.
//!
//! ## Thread Safety
//! The `Database` struct from `fernway-db` contains a `SqlitePool` which
//! is inherently thread-safe. Multiple handlers can execute queries
//! concurrently without explicit locking.

use fernway_db::Database;

/// Wrapper around `Database` for application state.
///
/// ## Why a Wrapper?
/// Shared state must be `Send + Sync`. This wrapper makes the intent
/// explicit and provides a clean API for accessing the database in
/// handlers.
#[derive(Debug)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let products = db_state.inner().products().list().await?;
    /// ```
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
