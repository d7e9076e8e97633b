//! # grocery-core: Grocery Item Records
//!
//! This crate holds the item record stored in the grocery catalog, together
//! with its comparison rules and its text format. It performs no file I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Grocery Catalog Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Store workflow (carts, checkout, reorders)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ find(code), len()                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 grocery-db (ItemCatalog)                        │   │
//! │  │          discovers and loads the persisted .dat file            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grocery-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────┐     │   │
//! │  │   │     item      │  │     codec     │  │     error     │     │   │
//! │  │   │  GroceryItem  │  │  ItemReader   │  │  DecodeError  │     │   │
//! │  │   │  eq / order   │  │  encode/parse │  │               │     │   │
//! │  │   └───────────────┘  └───────────────┘  └───────────────┘     │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO GLOBALS • PURE FUNCTIONS                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - The `GroceryItem` value type, equality and ordering
//! - [`codec`] - Quoted, comma-delimited text encoding and decoding
//! - [`error`] - Decode error types
//!
//! ## Example Usage
//!
//! ```rust
//! use grocery_core::GroceryItem;
//!
//! let item: GroceryItem = r#""012345","Acme","Widget",3.5"#.parse().unwrap();
//! assert_eq!(item, GroceryItem::new("012345", "Acme", "Widget", 3.50001));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod error;
pub mod item;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use codec::{write_records, ItemReader, DELIMITER};
pub use error::{DecodeError, DecodeResult};
pub use item::{prices_equal, GroceryItem, PRICE_EPSILON};
