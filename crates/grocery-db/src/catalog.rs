//! # Item Catalog
//!
//! In-memory table of grocery items keyed by product code.
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How the Catalog Is Built                             │
//! │                                                                         │
//! │  CatalogConfig (data_dir + candidate names)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  discover: first candidate that exists                                 │
//! │       │                     │                                           │
//! │       │ found               │ none found                                │
//! │       ▼                     ▼                                           │
//! │  read bytes            warn!, empty catalog                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  decode records until one fails                                        │
//! │       │   • duplicate code  → later record replaces earlier            │
//! │       │   • malformed record → load stops, earlier records kept        │
//! │       ▼                                                                 │
//! │  BTreeMap<code, GroceryItem>  (read-only from here on)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Callers normally build one catalog at startup with [`ItemCatalog::open`] and
//! pass `&ItemCatalog` to whatever needs lookups. For code that wants a single
//! process-wide instance, [`ItemCatalog::init_shared`] loads it exactly once.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use grocery_core::{GroceryItem, ItemReader};
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

static SHARED: OnceLock<ItemCatalog> = OnceLock::new();

/// Product code → item lookup table.
///
/// ## Usage
/// ```rust
/// use grocery_db::ItemCatalog;
///
/// let catalog = ItemCatalog::from_text(concat!(
///     "\"012345\",\"Acme\",\"Widget\",3.5\n",
///     "\"067890\",\"Acme\",\"Gadget\",12.25\n",
/// ));
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.find("067890").map(|i| i.name()), Some("Gadget"));
/// assert!(catalog.find("000000000000").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: BTreeMap<String, GroceryItem>,
    source: Option<PathBuf>,
}

impl ItemCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Discovers and loads the catalog data file.
    ///
    /// Never fails: a missing or unreadable file yields an empty catalog and a
    /// warning.
    pub fn open(config: &CatalogConfig) -> Self {
        let Some(path) = Self::discover(config) else {
            warn!(
                data_dir = %config.data_dir.display(),
                candidates = ?config.candidates,
                "No grocery item database file found. Proceeding with empty catalog"
            );
            return Self::new();
        };

        match Self::load_from_path(&path) {
            Ok(catalog) => {
                info!(path = %path.display(), entries = catalog.len(), "Catalog loaded");
                catalog
            }
            Err(e) => {
                warn!(error = %e, "Could not open grocery item database. Proceeding with empty catalog");
                Self::new()
            }
        }
    }

    /// Returns the first candidate file that exists, in configured order.
    pub fn discover(config: &CatalogConfig) -> Option<PathBuf> {
        config.candidate_paths().find(|path| {
            let found = path.is_file();
            debug!(path = %path.display(), found, "Probing for catalog file");
            found
        })
    }

    /// Loads a specific data file.
    pub fn load_from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
        let mut catalog = Self::from_reader(file).map_err(|e| CatalogError::io(path, e))?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Loads from raw bytes.
    ///
    /// Bytes are taken as-is (no newline translation). Invalid UTF-8 inside a
    /// field is replaced with U+FFFD and the record still loads with that text.
    pub fn from_reader<R: Read>(mut reader: R) -> std::io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    /// Loads records from text until the first one that fails to decode.
    pub fn from_text(text: &str) -> Self {
        let mut reader = ItemReader::new(text);
        let mut items = BTreeMap::new();

        loop {
            match reader.read_item() {
                Ok(item) => {
                    if let Some(previous) = items.insert(item.code().to_string(), item) {
                        debug!(code = %previous.code(), "Duplicate product code, keeping later record");
                    }
                }
                Err(e) if e.is_end_of_input() => break,
                Err(e) => {
                    debug!(error = %e, kept = items.len(), "Stopped loading at malformed record");
                    break;
                }
            }
        }

        ItemCatalog {
            items,
            source: None,
        }
    }

    // =========================================================================
    // Shared Instance
    // =========================================================================

    /// Loads the process-wide catalog on the first call; later calls return
    /// the same instance and ignore `config`.
    pub fn init_shared(config: &CatalogConfig) -> &'static ItemCatalog {
        SHARED.get_or_init(|| Self::open(config))
    }

    /// The process-wide catalog, if [`ItemCatalog::init_shared`] has run.
    pub fn shared() -> Option<&'static ItemCatalog> {
        SHARED.get()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Looks up an item by product code.
    pub fn find(&self, code: &str) -> Option<&GroceryItem> {
        self.items.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.items.contains_key(code)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in product code order.
    pub fn iter(&self) -> impl Iterator<Item = &GroceryItem> {
        self.items.values()
    }

    /// File the catalog was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
