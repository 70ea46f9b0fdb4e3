//! Catalog store.
//!
//! Loads the registry's entries from a JSON file once at startup and serves
//! read-only views of them for the rest of the process lifetime.

use super::schema::ServerEntry;
use crate::error::{RegistryError, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Immutable, ordered set of registry entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Entries in file order.
    entries: Vec<ServerEntry>,
    /// Name to position in `entries`.
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Load a catalog from a JSON file holding an array of entries.
    ///
    /// Any failure here is fatal for the caller: a registry without its
    /// catalog has nothing to serve.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content =
            std::fs::read_to_string(path).map_err(|e| RegistryError::io_with_path(e, path))?;
        let entries: Vec<ServerEntry> = serde_json::from_str(&content)?;

        let catalog = Self::from_entries(entries)?;
        info!(
            "Loaded {} servers from {}",
            catalog.len(),
            path.display()
        );

        Ok(catalog)
    }

    /// Build a catalog from entries already in memory.
    ///
    /// Names must be non-empty and unique; the first violation aborts the
    /// whole build.
    pub fn from_entries(entries: Vec<ServerEntry>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(entries.len());

        for (idx, entry) in entries.iter().enumerate() {
            if entry.name().is_empty() {
                return Err(RegistryError::Config {
                    message: format!("Catalog entry at index {} has empty name", idx),
                });
            }

            if by_name.insert(entry.name().to_string(), idx).is_some() {
                return Err(RegistryError::DuplicateServer {
                    name: entry.name().to_string(),
                });
            }

            debug!("Catalog entry: {} (v{})", entry.name(), entry.version());
        }

        Ok(Self { entries, by_name })
    }

    /// All entries, in catalog order.
    pub fn all(&self) -> &[ServerEntry] {
        &self.entries
    }

    /// Exact, case-sensitive lookup by `server.name`.
    pub fn find_by_name(&self, name: &str) -> Option<&ServerEntry> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }

    /// Entry names, in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ServerEntry::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
