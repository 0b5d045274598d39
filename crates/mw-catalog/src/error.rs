//! Error types for the built-in catalog

use mw_record::StoreError;

/// Catalog loading error
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A compiled-in table is not valid JSON for its shape
    #[error("invalid {table} table: {source}")]
    Parse {
        /// Table name
        table: &'static str,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// The dossier table violates a store invariant
    #[error("store construction failed: {0}")]
    Store(#[from] StoreError),
}

impl CatalogError {
    pub(crate) fn parse(table: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| Self::Parse { table, source }
    }
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
