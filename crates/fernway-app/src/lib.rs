//! # Fernway Application Layer
//!
//! Wires the catalog database and the in-memory storefront state together
//! and exposes the handlers and page loaders the UI calls.
//!
//! ## Module Organization
//! ```text
//! fernway_app/
//! ├── lib.rs          ◄─── You are here (App setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── selector.rs ◄─── Quantity selector state
//! │   └── config.rs   ◄─── Storefront configuration
//! ├── handlers/
//! │   ├── mod.rs      ◄─── Handler exports
//! │   ├── product.rs  ◄─── Catalog listing/lookup
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   └── quantity.rs ◄─── Quantity selection
//! ├── pages.rs        ◄─── Per-route data loaders
//! └── error.rs        ◄─── Application error type
//! ```

pub mod error;
pub mod handlers;
pub mod pages;
pub mod state;

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fernway_core::CartStore;
use fernway_db::{Database, DbConfig};

pub use error::{AppError, ErrorCode};
pub use state::{AppConfig, DbState, SelectorState};

/// The assembled application: one value holding every piece of shared state.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Determine Database Path ──────────────────────────────────────────► │
/// │     • macOS: ~/Library/Application Support/com.fernway.shop/fernway.db  │
/// │     • Windows: %APPDATA%\fernway\shop\fernway.db                        │
/// │     • Linux: ~/.local/share/fernway-shop/fernway.db                     │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • DbState: wraps the connection pool                                │
/// │     • CartStore: empty cart, no subscribers                             │
/// │     • SelectorState: no quantity cells                                  │
/// │     • AppConfig: env vars over defaults                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug)]
pub struct App {
    pub db: DbState,
    pub cart: CartStore,
    pub quantities: SelectorState,
    pub config: AppConfig,
}

impl App {
    /// Initializes the application against the platform-default database
    /// path (or `FERNWAY_DB_PATH` when set).
    pub async fn init() -> Result<Self, AppError> {
        let db_path = default_database_path()
            .map_err(|e| AppError::internal(format!("Could not resolve data directory: {}", e)))?;
        Self::init_with_db_path(db_path).await
    }

    /// Initializes the application against an explicit database path.
    pub async fn init_with_db_path(db_path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let db_path = db_path.into();
        info!(path = %db_path.display(), "Initializing Fernway");

        let db = Database::new(DbConfig::new(db_path)).await?;
        info!("Database connected and migrations applied");

        let app = App {
            db: DbState::new(db),
            cart: CartStore::new(),
            quantities: SelectorState::new(),
            config: AppConfig::from_env(),
        };
        info!(store = %app.config.store_name, "State initialized");

        Ok(app)
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fernway=trace` - Show trace for fernway crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fernway=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.fernway.shop/fernway.db`
/// - **Windows**: `%APPDATA%\fernway\shop\fernway.db`
/// - **Linux**: `~/.local/share/fernway-shop/fernway.db`
///
/// ## Development Override
/// Set `FERNWAY_DB_PATH` environment variable to use a custom path.
pub fn default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Check for override
    if let Ok(path) = std::env::var("FERNWAY_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    // Use platform-specific app data directory
    let proj_dirs = ProjectDirs::from("com", "fernway", "shop")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("fernway.db"))
}
