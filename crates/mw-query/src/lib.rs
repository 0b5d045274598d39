//! Mutant Watch Query Engine
//!
//! Filters resolved dossier records by category and free text.
//!
//! # Core Concepts
//!
//! - [`TextQuery`]: trimmed, lower-cased substring term over name, alias and powers
//! - [`Query`]: optional category AND text, category checked first
//! - [`RecordFilter`]: predicate trait shared by categories and queries
//! - [`QueryEngine`]: stable, order-preserving filtering over a [`mw_record::RecordStore`]
//!
//! # Example
//!
//! ```rust
//! use mw_query::QueryEngine;
//! use mw_record::{Category, DossierDefaults, PatchTable, RawRecord, RecordStore};
//!
//! let raw = vec![RawRecord::new("M-024", Category::Mutant)
//!     .with_alias("Nightcrawler")
//!     .with_powers(["Téléportation"])];
//! let store = RecordStore::build(&raw, &PatchTable::new(), &DossierDefaults::default()).unwrap();
//!
//! let engine = QueryEngine::new(&store);
//! assert_eq!(engine.filter_by_category(Category::Mutant, "télépo").len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod engine;
mod query;

// Re-exports
pub use engine::QueryEngine;
pub use query::{Query, RecordFilter, TextQuery};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
