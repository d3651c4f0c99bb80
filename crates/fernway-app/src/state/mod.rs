//! # State Module
//!
//! Manages application state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Handler Signatures**: Handlers declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                          App                                    │   │
//! │  │  db: DbState                                                    │   │
//! │  │  cart: CartStore                                                │   │
//! │  │  quantities: SelectorState                                      │   │
//! │  │  config: AppConfig                                              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌──────────────┬─────────┼───────────────┬──────────────┐          │
//! │     ▼              ▼         ▼               ▼              │          │
//! │  ┌──────────┐  ┌──────────┐  ┌─────────────┐  ┌───────────┐ │          │
//! │  │ DbState  │  │CartStore │  │SelectorState│  │ AppConfig │ │          │
//! │  │          │  │          │  │             │  │           │ │          │
//! │  │ Database │  │ Mutex<   │  │ Mutex<      │  │ store name│ │          │
//! │  │ (SQLite  │  │  cart +  │  │  Quantity   │  │ currency  │ │          │
//! │  │  pool)   │  │ listeners│  │  Selector>  │  │           │ │          │
//! │  └──────────┘  └──────────┘  └─────────────┘  └───────────┘ │          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: Database has internal connection pool (thread-safe)        │
//! │  • CartStore: internally synchronized (fernway-core)                   │
//! │  • SelectorState: protected by Mutex for exclusive access              │
//! │  • AppConfig: read-only after initialization                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;
mod selector;

pub use config::AppConfig;
pub use db::DbState;
pub use selector::SelectorState;
