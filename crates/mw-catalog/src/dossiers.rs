//! Built-in dossier table
//!
//! The authored records and their patches ship as one JSON document.
//! Records keep file order; that order is the store order every list page
//! and query result follows.

use mw_record::{DossierDefaults, PatchTable, RawRecord, RecordStore};
use serde::Deserialize;

use crate::error::{CatalogError, Result};

const DOSSIERS_JSON: &str = include_str!("../data/dossiers.json");

/// Parsed contents of the dossier table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DossierTable {
    /// Authored records, store order
    pub records: Vec<RawRecord>,
    /// Per-record overrides keyed by id
    #[serde(default)]
    pub patches: PatchTable,
}

impl DossierTable {
    /// Parse a dossier table from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when the text does not match the
    /// table shape.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(CatalogError::parse("dossier"))
    }

    /// The compiled-in table
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the embedded JSON is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_json(DOSSIERS_JSON)
    }

    /// Resolve every record against `defaults` and this table's patches
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Store`] on an empty or duplicate id.
    pub fn into_store(self, defaults: &DossierDefaults) -> Result<RecordStore> {
        let store = RecordStore::build(&self.records, &self.patches, defaults)?;
        tracing::debug!(
            records = self.records.len(),
            patches = self.patches.len(),
            "Resolved dossier table"
        );
        Ok(store)
    }
}

/// Store built from the compiled-in table and the stock defaults
///
/// # Errors
///
/// Fails only if the embedded table itself is broken.
pub fn builtin_store() -> Result<RecordStore> {
    builtin_store_with(&DossierDefaults::default())
}

/// Store built from the compiled-in table and caller-supplied defaults
///
/// # Errors
///
/// Fails only if the embedded table itself is broken.
pub fn builtin_store_with(defaults: &DossierDefaults) -> Result<RecordStore> {
    DossierTable::builtin()?.into_store(defaults)
}
