//! # Error Types
//!
//! Decode error types for grocery-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  grocery-core errors (this file)                                       │
//! │  └── DecodeError     - A record could not be read from text            │
//! │                                                                         │
//! │  grocery-db errors (separate crate)                                    │
//! │  └── CatalogError    - Config and data file failures                   │
//! │                                                                         │
//! │  Flow: DecodeError → ends catalog load (never surfaced as a failure)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Name the field being read so truncated loads can be diagnosed
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Decode Error
// =============================================================================

/// Failures while decoding one `code,brand,name,price` record.
///
/// Any of these leaves the reader in the failed state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// Input ended before the field could be read.
    ///
    /// ## When This Occurs
    /// - Clean end of a data file (the normal way a load finishes)
    /// - A record cut short mid-line
    #[error("Unexpected end of input while reading {field}")]
    UnexpectedEnd { field: &'static str },

    /// A text field did not start with a double quote.
    #[error("Expected opening quote for {field}, found '{found}'")]
    MissingQuote { field: &'static str, found: char },

    /// A quoted text field never closed.
    #[error("Unterminated quoted {field}")]
    UnterminatedQuote { field: &'static str },

    /// The separator after a field was not the delimiter.
    ///
    /// ## Example
    /// ```text
    /// "012345","Acme";"Widget",3.5
    ///                ^ BadDelimiter { after: "brand", found: ';' }
    /// ```
    #[error("Expected ',' after {after}, found '{found}'")]
    BadDelimiter { after: &'static str, found: char },

    /// The price text was not a number.
    #[error("Invalid price: '{0}'")]
    InvalidPrice(String),

    /// Text followed a complete record where only one was expected.
    #[error("Unexpected input after record: '{0}'")]
    TrailingInput(String),

    /// The reader already failed; nothing further is decoded until it is cleared.
    #[error("Reader is in a failed state")]
    StreamFailed,
}

impl DecodeError {
    /// True when the input simply ran out before a record started.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, DecodeError::UnexpectedEnd { field: "code" })
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with DecodeError.
pub type DecodeResult<T> = Result<T, DecodeError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DecodeError::BadDelimiter {
            after: "brand",
            found: ';',
        };
        assert_eq!(err.to_string(), "Expected ',' after brand, found ';'");

        let err = DecodeError::InvalidPrice("abc".to_string());
        assert_eq!(err.to_string(), "Invalid price: 'abc'");
    }

    #[test]
    fn test_end_of_input_only_before_code() {
        assert!(DecodeError::UnexpectedEnd { field: "code" }.is_end_of_input());
        assert!(!DecodeError::UnexpectedEnd { field: "price" }.is_end_of_input());
        assert!(!DecodeError::StreamFailed.is_end_of_input());
    }
}
