//! Mutant Watch Record System
//!
//! Layered dossier records and the read-only store that holds them.
//!
//! # Overview
//!
//! The record system provides:
//! - **RawRecord / RecordPatch / DossierDefaults**: the three construction layers
//! - **Record**: a resolved, normalized, immutable dossier entry
//! - **RecordStore**: authoring-ordered list with lookup by id
//!
//! # Example
//!
//! ```rust
//! use mw_record::{Category, DossierDefaults, PatchTable, RawRecord, RecordPatch, RecordStore};
//!
//! let raw = vec![RawRecord::new("M-001", Category::Mutant)
//!     .with_name("LOGAN")
//!     .with_alias(" Wolverine ")];
//!
//! let mut patches = PatchTable::new();
//! patches.insert("M-001".into(), RecordPatch {
//!     status: Some("Actif".into()),
//!     ..RecordPatch::default()
//! });
//!
//! let store = RecordStore::build(&raw, &patches, &DossierDefaults::default()).unwrap();
//! let logan = store.get_by_id("M-001").unwrap();
//! assert_eq!(logan.alias(), "Wolverine");
//! assert_eq!(logan.status(), "Actif");
//! ```

#![warn(missing_docs)]

mod serde_helpers;

pub mod record;
pub mod store;
pub mod types;

// Re-exports
pub use record::{DossierDefaults, PatchTable, RawRecord, Record, RecordPatch, PLACEHOLDER_IMAGE};
pub use store::{RecordStore, StoreError};
pub use types::{Category, ClassTier, ParseTypeError, RecordId};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for record operations
    pub use crate::{
        Category, ClassTier, DossierDefaults, PatchTable, RawRecord, Record, RecordId,
        RecordPatch, RecordStore,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
