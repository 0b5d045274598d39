//! Built-in hotspot reports

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

const HOTSPOTS_JSON: &str = include_str!("../data/hotspots.json");

/// Presumed nature of the subject behind a hotspot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotspotCategory {
    /// Presumed gene-based mutant
    Mutant,
    /// Presumed non-mutant super-powered subject
    Superior,
    /// Not identified yet
    Inconnu,
}

impl HotspotCategory {
    /// Lower-case wire name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mutant => "mutant",
            Self::Superior => "superior",
            Self::Inconnu => "inconnu",
        }
    }
}

impl fmt::Display for HotspotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supporting picture attached to a hotspot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedImage {
    /// Picture path
    pub src: String,
    /// Picture description
    pub alt: String,
}

/// One field report on the hotspot board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    /// Report id, `HS-001` style
    pub id: String,
    /// Headline
    pub title: String,
    /// Where the sighting happened
    pub location: String,
    /// Display date as authored
    pub date: String,
    /// Urgency badge text
    pub badge: String,
    /// Badge style token
    pub badge_class: String,
    /// Presumed nature, drives the board filter
    pub category: HotspotCategory,
    /// Category caption shown on the card
    pub category_label: String,
    /// Category tag style token, `tag-mutant` style
    pub tag_class: String,
    /// Main picture path
    pub image: String,
    /// Main picture description
    pub image_alt: String,
    /// One-paragraph abstract shown on the board
    pub summary: String,
    /// Full report body
    ///
    /// Authored HTML (`h4`, `p`, `ul`/`li`, `strong`, `br`), compiled in
    /// with the table and trusted as-is.
    pub details: String,
    /// Evidence pictures, possibly none
    #[serde(default)]
    pub related_images: Vec<RelatedImage>,
}

/// Parse a hotspot table from JSON text
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] on malformed input.
pub fn hotspots_from_json(text: &str) -> Result<Vec<Hotspot>> {
    serde_json::from_str(text).map_err(CatalogError::parse("hotspot"))
}

/// The compiled-in hotspot reports, board order
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the embedded JSON is malformed.
pub fn builtin_hotspots() -> Result<Vec<Hotspot>> {
    hotspots_from_json(HOTSPOTS_JSON)
}
