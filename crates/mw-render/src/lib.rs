//! Mutant Watch Renderers
//!
//! Turns resolved records into presentation views: compact file cards for
//! list pages and full dossier views for detail pages.
//!
//! # Core Concepts
//!
//! - [`CardView`]: id, class, status, portrait, alias, name and joined powers
//! - [`DetailView`]: identity block, category label, power list and [`Narrative`]
//! - [`render_card_html`] / [`render_detail_html`]: escaped HTML fragments
//!
//! Rendering is total: a resolved record always has every field it needs.
//!
//! # Example
//!
//! ```rust
//! use mw_record::{Category, DossierDefaults, RawRecord, Record};
//! use mw_render::{render_card, render_detail};
//!
//! let raw = RawRecord::new("HS-010", Category::Superior)
//!     .with_alias("Thor")
//!     .with_class("Omega")
//!     .with_powers(["Contrôle Foudre", "Mjolnir"]);
//! let record = Record::resolve(&raw, None, &DossierDefaults::default());
//!
//! assert_eq!(render_card(&record).powers, "Contrôle Foudre, Mjolnir");
//! assert_eq!(render_detail(&record).category_label, "Homo Superior");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod card;
mod detail;
mod markup;

// Re-exports
pub use card::{render_card, CardView, POWER_SEPARATOR};
pub use detail::{category_label, render_detail, DetailView, Narrative, MUTANT_LABEL, SUPERIOR_LABEL};
pub use markup::{render_card_html, render_detail_html, OPEN_DOSSIER_LABEL};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
