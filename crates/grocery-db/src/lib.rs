//! # grocery-db: Item Catalog
//!
//! This crate builds the grocery item catalog from a persisted data file and
//! answers lookups by product code.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Data Flow                                │
//! │                                                                         │
//! │  Startup (store workflow, grocery-lookup)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    grocery-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ CatalogConfig │    │  ItemCatalog  │    │ CatalogError │  │   │
//! │  │   │  (config.rs)  │───►│ (catalog.rs)  │    │  (error.rs)  │  │   │
//! │  │   │ dir, names    │    │ discover/load │    │              │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │ decode                         │   │
//! │  └────────────────────────────────┼─────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │                         grocery-core (GroceryItem)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Data directory and candidate file names
//! - [`catalog`] - Discovery, loading and lookup
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use grocery_db::{CatalogConfig, ItemCatalog};
//!
//! let config = CatalogConfig::load_or_default(None);
//! let catalog = ItemCatalog::open(&config);
//!
//! if let Some(item) = catalog.find("00072250018548") {
//!     println!("{:.2}", item);
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::ItemCatalog;
pub use config::{CatalogConfig, DEFAULT_CANDIDATES};
pub use error::{CatalogError, CatalogResult};
