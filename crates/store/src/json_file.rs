//! File-backed JSON store.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use stockroom_core::ItemName;
use stockroom_inventory::Inventory;

/// Path used when no explicit location is configured.
pub const DEFAULT_STORE_PATH: &str = "inventory.json";

/// Persistence-level error.
///
/// Only genuine infrastructure failures land here; an absent or corrupt file
/// is an expected condition and surfaces through [`LoadOutcome`] instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of a load attempt.
///
/// Missing and corrupt files are recoverable: the caller resets to an empty
/// inventory and continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and parsed; here is the mapping.
    Loaded { items: BTreeMap<ItemName, i64> },
    /// No file at the configured path.
    MissingFile,
    /// The file exists but does not hold a valid JSON object.
    InvalidJson { detail: String },
}

impl LoadOutcome {
    /// The loaded mapping, or empty for the recoverable outcomes.
    pub fn into_items(self) -> BTreeMap<ItemName, i64> {
        match self {
            LoadOutcome::Loaded { items } => items,
            LoadOutcome::MissingFile | LoadOutcome::InvalidJson { .. } => BTreeMap::new(),
        }
    }
}

/// Outcome of [`JsonFileStore::load_into`].
///
/// Mirrors [`LoadOutcome`] without the mapping, which has moved into the
/// inventory by the time this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// File read and parsed; the inventory now holds `count` entries.
    Loaded { count: usize },
    /// No file at the configured path; inventory reset to empty.
    MissingFile,
    /// Undecodable file; inventory reset to empty.
    InvalidJson { detail: String },
}

/// JSON-object file store for an [`Inventory`] mapping.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the mapping from disk.
    ///
    /// A missing file or undecodable content is reported as a [`LoadOutcome`],
    /// not an error; `Err` is reserved for IO failures such as permission
    /// problems. Keys that fail item-name validation are skipped with a
    /// warning rather than failing the whole load.
    pub fn load(&self) -> Result<LoadOutcome, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "inventory file not found");
                return Ok(LoadOutcome::MissingFile);
            }
            Err(e) => return Err(e.into()),
        };

        let parsed: BTreeMap<String, i64> = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "invalid inventory file");
                return Ok(LoadOutcome::InvalidJson {
                    detail: e.to_string(),
                });
            }
        };

        let mut items = BTreeMap::new();
        for (key, qty) in parsed {
            match ItemName::new(key) {
                Ok(name) => {
                    items.insert(name, qty);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping invalid item key in inventory file");
                }
            }
        }

        Ok(LoadOutcome::Loaded { items })
    }

    /// Load and replace the inventory's mapping in one step.
    pub fn load_into(&self, inventory: &mut Inventory) -> Result<LoadStatus, StoreError> {
        match self.load()? {
            LoadOutcome::Loaded { items } => {
                let count = items.len();
                inventory.replace(items);
                Ok(LoadStatus::Loaded { count })
            }
            LoadOutcome::MissingFile => {
                inventory.replace(BTreeMap::new());
                Ok(LoadStatus::MissingFile)
            }
            LoadOutcome::InvalidJson { detail } => {
                inventory.replace(BTreeMap::new());
                Ok(LoadStatus::InvalidJson { detail })
            }
        }
    }

    /// Serialize the full mapping to disk, 4-space indented.
    pub fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let items = inventory.snapshot();

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        items.serialize(&mut ser)?;

        std::fs::write(&self.path, buf)?;
        tracing::debug!(path = %self.path.display(), items = items.len(), "inventory saved");
        Ok(())
    }
}
