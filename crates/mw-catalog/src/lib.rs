//! Mutant Watch Built-in Catalog
//!
//! Compiled-in tables shipped with the site: the dossier records and their
//! patches, the hotspot board, and the activity ticker messages. Tables are
//! embedded JSON parsed on demand; nothing is read from disk at runtime.
//!
//! # Example
//!
//! ```rust
//! use mw_catalog::builtin_store;
//! use mw_record::Category;
//!
//! let store = builtin_store().unwrap();
//! assert_eq!(store.count_by_category(Category::Superior), 17);
//! assert_eq!(store.get_by_id("M-010").unwrap().status(), "Actif");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod activity;
mod dossiers;
mod error;
mod hotspots;

// Re-exports
pub use activity::{activity_from_json, builtin_activity, ActivityEntry};
pub use dossiers::{builtin_store, builtin_store_with, DossierTable};
pub use error::{CatalogError, Result};
pub use hotspots::{builtin_hotspots, hotspots_from_json, Hotspot, HotspotCategory, RelatedImage};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
