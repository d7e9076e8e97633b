//! # Grocery Item
//!
//! The value type stored in the catalog.
//!
//! ## Record Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         GroceryItem                                     │
//! │                                                                         │
//! │   code   ── "00072250018548"   unique key (UPC barcode)                │
//! │   brand  ── "Nature's Own"     free text                               │
//! │   name   ── "Honey Wheat"      free text                               │
//! │   price  ── 2.99               f64, not range-checked                  │
//! │                                                                         │
//! │  Ordering: code → name → brand → price (within 1e-4 is "equal")        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why an Epsilon?
//! Prices arrive as decimal text and are stored as `f64`, so `2.99` read from
//! two different files may differ in the last bits. Two prices closer than
//! [`PRICE_EPSILON`] are the same price for equality and ordering alike.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Tolerance below which two prices are considered equal.
pub const PRICE_EPSILON: f64 = 1e-4;

/// Returns true if two prices differ by less than [`PRICE_EPSILON`].
///
/// Identical infinities are equal, and any NaN equals any other NaN.
#[inline]
pub fn prices_equal(lhs: f64, rhs: f64) -> bool {
    lhs == rhs || (lhs.is_nan() && rhs.is_nan()) || (lhs - rhs).abs() < PRICE_EPSILON
}

// =============================================================================
// Grocery Item
// =============================================================================

/// One product record: code, brand, name and price.
///
/// ## Example
/// ```rust
/// use grocery_core::GroceryItem;
///
/// let mut item = GroceryItem::new("012345", "Acme", "Widget", 3.5);
/// item.set_brand("Acme Co").set_price(3.75);
///
/// assert_eq!(item.brand(), "Acme Co");
/// assert_eq!(item.price(), 3.75);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroceryItem {
    code: String,
    brand: String,
    name: String,
    price: f64,
}

impl GroceryItem {
    /// Creates an item from its four fields.
    pub fn new(
        code: impl Into<String>,
        brand: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Self {
        GroceryItem {
            code: code.into(),
            brand: brand.into(),
            name: name.into(),
            price,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Product code (UPC), the catalog key.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    // =========================================================================
    // Take Operations
    // =========================================================================
    // These move a text field out of the item. The field is left empty.

    /// Moves the code out, leaving an empty code behind.
    pub fn take_code(&mut self) -> String {
        std::mem::take(&mut self.code)
    }

    /// Moves the brand out, leaving an empty brand behind.
    pub fn take_brand(&mut self) -> String {
        std::mem::take(&mut self.brand)
    }

    /// Moves the name out, leaving an empty name behind.
    pub fn take_name(&mut self) -> String {
        std::mem::take(&mut self.name)
    }

    /// Consumes the item, returning `(code, brand, name, price)`.
    pub fn into_parts(self) -> (String, String, String, f64) {
        (self.code, self.brand, self.name, self.price)
    }

    // =========================================================================
    // Modifiers
    // =========================================================================
    // Each returns `&mut Self` so calls chain: `item.set_brand(b).set_price(p)`.

    pub fn set_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.code = code.into();
        self
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) -> &mut Self {
        self.brand = brand.into();
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn set_price(&mut self, price: f64) -> &mut Self {
        self.price = price;
        self
    }

    // =========================================================================
    // Relational Operations
    // =========================================================================

    /// Exact text fields and prices within [`PRICE_EPSILON`].
    pub fn equals(lhs: &GroceryItem, rhs: &GroceryItem) -> bool {
        prices_equal(lhs.price, rhs.price)
            && lhs.code == rhs.code
            && lhs.brand == rhs.brand
            && lhs.name == rhs.name
    }

    /// Orders by code, then name, then brand, then price.
    ///
    /// Prices within [`PRICE_EPSILON`] compare `Equal`. Otherwise the lower
    /// price sorts first; `total_cmp` keeps NaN prices in a consistent place.
    pub fn compare(lhs: &GroceryItem, rhs: &GroceryItem) -> Ordering {
        lhs.code
            .cmp(&rhs.code)
            .then_with(|| lhs.name.cmp(&rhs.name))
            .then_with(|| lhs.brand.cmp(&rhs.brand))
            .then_with(|| {
                if prices_equal(lhs.price, rhs.price) {
                    Ordering::Equal
                } else {
                    lhs.price.total_cmp(&rhs.price)
                }
            })
    }
}

impl PartialEq for GroceryItem {
    fn eq(&self, other: &Self) -> bool {
        GroceryItem::equals(self, other)
    }
}

impl Eq for GroceryItem {}

impl PartialOrd for GroceryItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroceryItem {
    fn cmp(&self, other: &Self) -> Ordering {
        GroceryItem::compare(self, other)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
