//! # Repository Module
//!
//! Database repository implementations for the storefront catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Page loader / handler                                              │
//! │       │                                                             │
//! │       │  db.products().get_by_slug("boston-fern")                   │
//! │       ▼                                                             │
//! │  ProductRepository                                                  │
//! │  ├── list()                                                         │
//! │  ├── get_by_slug(&self, slug)                                       │
//! │  ├── get_by_id(&self, id)                                           │
//! │  ├── count()                                                        │
//! │  └── insert(&self, product)                                         │
//! │       │                                                             │
//! │       │  SQL query                                                  │
//! │       ▼                                                             │
//! │  SQLite database                                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
