//! # Catalog Error Types
//!
//! Error types for catalog configuration and data file access.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / toml::de::Error                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds the file path                       │
//! │       │                                                                 │
//! │       ├──► ItemCatalog::open  → logged as a warning, empty catalog     │
//! │       └──► load_from_path     → returned to the caller                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Catalog configuration and loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A data or config file could not be opened or read.
    ///
    /// ## When This Occurs
    /// - File removed between discovery and open
    /// - File permissions issue
    /// - Path is a directory
    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// catalog.toml is not valid TOML for the expected shape.
    #[error("Failed to parse catalog config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but its values are unusable.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),
}

impl CatalogError {
    /// Creates an Io error tagged with the path being accessed.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
