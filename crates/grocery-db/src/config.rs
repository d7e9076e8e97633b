//! # Catalog Configuration
//!
//! Where the catalog looks for its data file.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     GROCERY_DATA_DIR=/srv/grocery                                      │
//! │     GROCERY_DATA_FILE=Custom.dat   (tried before the defaults)         │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/grocery-catalog/catalog.toml (Linux)                     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     data_dir = "." and the five standard file names                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # catalog.toml
//! [catalog]
//! data_dir = "/srv/grocery"
//! candidates = [
//!     "Grocery_UPC_Database-Large.dat",
//!     "Sample_GroceryItem_Database.dat",
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, CatalogResult};

/// Data files probed in order; the first one present is loaded.
pub const DEFAULT_CANDIDATES: [&str; 5] = [
    "Grocery_UPC_Database-Full.dat",
    "Grocery_UPC_Database-Large.dat",
    "Grocery_UPC_Database-Medium.dat",
    "Grocery_UPC_Database-Small.dat",
    "Sample_GroceryItem_Database.dat",
];

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "GROCERY_DATA_DIR";

/// Environment variable naming a data file to try first.
pub const ENV_DATA_FILE: &str = "GROCERY_DATA_FILE";

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_candidates() -> Vec<String> {
    DEFAULT_CANDIDATES.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Catalog Configuration
// =============================================================================

/// Catalog data source settings.
///
/// ## Example
/// ```rust
/// use grocery_db::CatalogConfig;
///
/// let config = CatalogConfig::new()
///     .data_dir("/srv/grocery")
///     .candidates(["Grocery_UPC_Database-Small.dat"]);
/// assert_eq!(config.candidates.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory the candidate names are resolved against.
    /// Default: current working directory
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File names probed in priority order.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            data_dir: default_data_dir(),
            candidates: default_candidates(),
        }
    }
}

/// On-disk layout of catalog.toml.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    catalog: CatalogConfig,
}

impl CatalogConfig {
    /// Creates a config with the default directory and candidates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory searched for data files.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Replaces the candidate file names.
    pub fn candidates<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = names.into_iter().map(Into::into).collect();
        self
    }

    /// Full paths of the candidates, in probe order.
    pub fn candidate_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.candidates.iter().map(|name| self.data_dir.join(name))
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (catalog.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// `load` with overrides taken from `lookup` instead of the environment.
    fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> CatalogResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading catalog config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| CatalogError::io(&path, e))?;
                config = toml::from_str::<ConfigFile>(&contents)?.catalog;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load catalog config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.candidates.is_empty() {
            return Err(CatalogError::InvalidConfig(
                "at least one candidate file name is required".into(),
            ));
        }

        if self.candidates.iter().any(|name| name.trim().is_empty()) {
            return Err(CatalogError::InvalidConfig(
                "candidate file names must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides from a variable lookup (the process environment in `load`).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            debug!(data_dir = %dir, "Overriding data directory from environment");
            self.data_dir = PathBuf::from(dir);
        }

        if let Some(file) = lookup(ENV_DATA_FILE) {
            debug!(file = %file, "Adding data file from environment");
            self.candidates.retain(|name| *name != file);
            self.candidates.insert(0, file);
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "grocery", "catalog")
            .map(|dirs| dirs.config_dir().join("catalog.toml"))
    }
}
