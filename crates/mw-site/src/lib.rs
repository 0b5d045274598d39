//! Mutant Watch Site Controllers
//!
//! Page-level collaborators around the dossier core:
//!
//! - [`AccessGate`] and [`Session`]: key check guarding every page
//! - [`Router`]: dossier links, back-link whitelist and [`DossierRoute`] resolution
//! - [`ActivityFeed`]: randomized home-page ticker
//! - [`Testimony`]: field report and its `mailto:` link
//! - [`HotspotBoard`]: filterable hotspot reports and their [`HotspotDetail`] pages
//! - [`SiteConfig`]: tunables loaded from TOML or YAML
//!
//! # Example
//!
//! ```rust
//! use mw_site::{AccessGate, DossierRoute, Router, Session};
//!
//! let store = mw_catalog::builtin_store().unwrap();
//! let mut session = Session::new();
//!
//! assert!(AccessGate::default().check(" trask ", &mut session).is_granted());
//!
//! let route = Router::default().resolve_dossier(&session, &store, "?id=M-007&from=mutants");
//! assert!(matches!(route, DossierRoute::Show { back_link: "mutants.html", .. }));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod feed;
mod gate;
mod hotspot;
mod navigation;
mod report;
mod sync;

// Re-exports
pub use config::{
    ConfigError, SiteConfig, DEFAULT_ACCESS_KEY, DEFAULT_FEED_SIZE, DEFAULT_REPORT_RECIPIENT,
};
pub use feed::{icon_for, ActivityFeed, FeedItem, Stamp, FALLBACK_ICON};
pub use gate::{AccessGate, AccessOutcome, Session};
pub use hotspot::{
    hotspot_link, hotspot_not_found_message, render_hotspot_not_found_html, HotspotBoard,
    HotspotDetail, HotspotFilter, UnknownFilter, EVIDENCE_HEADING, HOTSPOT_BOARD_PAGE,
    HOTSPOT_DETAIL_PAGE, HOTSPOT_NOT_FOUND_TITLE,
};
pub use navigation::{
    back_link, dossier_link, list_page, origin_page, DossierRoute, Router, DOSSIER_PAGE, FALLBACK_BACK_LINK,
    NOT_FOUND_MESSAGE,
};
pub use report::{ReportError, Testimony, UNSPECIFIED_DATE, UNSPECIFIED_URGENCY};
pub use sync::{last_sync, last_sync_at, last_sync_now};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
