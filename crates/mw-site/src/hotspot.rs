//! Hotspot board and report pages
//!
//! The board lists every report behind category filter buttons. A report
//! page is opened with `hotspot-detail.html?id={id}` and always links back
//! to the board.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use html_escape::{decode_html_entities, encode_double_quoted_attribute, encode_text};
use mw_catalog::{builtin_hotspots, CatalogError, Hotspot, HotspotCategory, RelatedImage};
use serde::Serialize;

/// Board page, target of the back link on every report page
pub const HOTSPOT_BOARD_PAGE: &str = "hotspot.html";

/// Report page file name
pub const HOTSPOT_DETAIL_PAGE: &str = "hotspot-detail.html";

/// Heading of the evidence picture section
pub const EVIDENCE_HEADING: &str = "PREUVES PHOTOGRAPHIQUES";

/// Heading shown when no report matches the requested id
pub const HOTSPOT_NOT_FOUND_TITLE: &str = "⚠️ SIGNALEMENT NON TROUVÉ";

const BACK_LABEL: &str = "← RETOUR AUX SIGNALEMENTS";
const TRANSMIT_PAGE: &str = "transmission.html";
const TRANSMIT_LABEL: &str = "📡 TRANSMETTRE UN COMPLÉMENT";

/// Link to the page of one report
#[must_use]
pub fn hotspot_link(id: &str) -> String {
    format!("{HOTSPOT_DETAIL_PAGE}?id={}", urlencoding::encode(id))
}

/// Explanation under [`HOTSPOT_NOT_FOUND_TITLE`]
///
/// A missing or blank id is reported as `aucun`.
#[must_use]
pub fn hotspot_not_found_message(id: Option<&str>) -> String {
    let id = id.map(str::trim).filter(|id| !id.is_empty()).unwrap_or("aucun");
    format!("L'identifiant \"{id}\" ne correspond à aucun signalement enregistré.")
}

/// Filter buttons of the hotspot board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HotspotFilter {
    /// Every report
    #[default]
    All,
    /// Reports of one presumed category
    Only(HotspotCategory),
}

impl HotspotFilter {
    /// Whether `hotspot` stays visible
    #[inline]
    #[must_use]
    pub fn matches(self, hotspot: &Hotspot) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => hotspot.category == category,
        }
    }
}

impl FromStr for HotspotFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "mutant" => Ok(Self::Only(HotspotCategory::Mutant)),
            "superior" => Ok(Self::Only(HotspotCategory::Superior)),
            "inconnu" => Ok(Self::Only(HotspotCategory::Inconnu)),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}

impl fmt::Display for HotspotFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

/// Filter name outside `all|mutant|superior|inconnu`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hotspot filter: {0}")]
pub struct UnknownFilter(pub String);

/// The hotspot board
#[derive(Debug, Clone, Default)]
pub struct HotspotBoard {
    hotspots: Vec<Hotspot>,
}

impl HotspotBoard {
    /// Board over `hotspots`, kept in the given order
    #[must_use]
    pub fn new(hotspots: Vec<Hotspot>) -> Self {
        Self { hotspots }
    }

    /// Board over the compiled-in reports
    ///
    /// # Errors
    ///
    /// Fails only if the embedded table is broken.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(builtin_hotspots()?))
    }

    /// Visible reports, board order
    #[must_use]
    pub fn filter(&self, filter: HotspotFilter) -> Vec<&Hotspot> {
        self.hotspots.iter().filter(|h| filter.matches(h)).collect()
    }

    /// Report by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }

    /// Report page for `id`, `None` when no report matches
    #[must_use]
    pub fn detail(&self, id: &str) -> Option<HotspotDetail<'_>> {
        let found = self.get(id.trim()).map(HotspotDetail::new);
        if found.is_none() {
            tracing::debug!(id, "unknown hotspot report");
        }
        found
    }

    /// Number of reports
    #[must_use]
    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    /// True when the board has no report
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }
}

/// Full page of one hotspot report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotDetail<'a> {
    /// The report as authored
    #[serde(flatten)]
    pub hotspot: &'a Hotspot,
    /// Always the board page
    pub back_link: &'static str,
}

impl<'a> HotspotDetail<'a> {
    /// Page for `hotspot`
    #[must_use]
    pub const fn new(hotspot: &'a Hotspot) -> Self {
        Self {
            hotspot,
            back_link: HOTSPOT_BOARD_PAGE,
        }
    }

    /// Evidence pictures; the section is left out when empty
    #[must_use]
    pub fn evidence(&self) -> &'a [RelatedImage] {
        &self.hotspot.related_images
    }

    /// Report body as plain text
    ///
    /// Block tags become line breaks, list items are prefixed with `- `,
    /// inline tags are dropped and entities decoded.
    #[must_use]
    pub fn details_text(&self) -> String {
        markup_to_text(&self.hotspot.details)
    }

    /// Report page markup
    ///
    /// Every field is escaped except the report body, which is authored
    /// markup compiled in with the table.
    #[must_use]
    pub fn render_html(&self) -> String {
        let h = self.hotspot;
        let mut html = String::with_capacity(2048 + h.details.len());

        html.push_str("<section class=\"hotspot-detail\">\n");
        html.push_str("  <div class=\"detail-header\">\n");
        let _ = writeln!(
            html,
            "    <a href=\"{}\" class=\"back-link\">{BACK_LABEL}</a>",
            self.back_link
        );
        let _ = writeln!(html, "    <span class=\"hotspot-id\">{}</span>", encode_text(&h.id));
        let _ = writeln!(
            html,
            "    <span class=\"hotspot-badge {}\">{}</span>",
            encode_double_quoted_attribute(&h.badge_class),
            encode_text(&h.badge),
        );
        html.push_str("  </div>\n");

        let _ = writeln!(
            html,
            "  <div class=\"detail-hero\"><img src=\"{}\" alt=\"{}\"></div>",
            encode_double_quoted_attribute(&h.image),
            encode_double_quoted_attribute(&h.image_alt),
        );

        html.push_str("  <div class=\"detail-content\">\n");
        let _ = writeln!(html, "    <h1>{}</h1>", encode_text(&h.title));
        html.push_str("    <div class=\"detail-meta\">\n");
        let _ = writeln!(html, "      <span>📍 {}</span>", encode_text(&h.location));
        let _ = writeln!(html, "      <span>🕐 {}</span>", encode_text(&h.date));
        let _ = writeln!(
            html,
            "      <span class=\"hotspot-tag {}\">{}</span>",
            encode_double_quoted_attribute(&h.tag_class),
            encode_text(&h.category_label),
        );
        html.push_str("    </div>\n");
        let _ = writeln!(html, "    <p class=\"detail-summary\">{}</p>", encode_text(&h.summary));
        let _ = writeln!(html, "    <div class=\"detail-full\">\n{}\n    </div>", h.details);

        if !self.evidence().is_empty() {
            html.push_str("    <div class=\"detail-related-images\">\n");
            let _ = writeln!(html, "      <h4>{EVIDENCE_HEADING}</h4>");
            html.push_str("      <div class=\"related-images-grid\">\n");
            for image in self.evidence() {
                let _ = writeln!(
                    html,
                    "        <div class=\"evidence-photo\"><img src=\"{}\" alt=\"{}\"></div>",
                    encode_double_quoted_attribute(&image.src),
                    encode_double_quoted_attribute(&image.alt),
                );
            }
            html.push_str("      </div>\n    </div>\n");
        }

        let _ = writeln!(
            html,
            "    <div class=\"detail-cta\"><a href=\"{TRANSMIT_PAGE}\" class=\"btn-transmit\">{TRANSMIT_LABEL}</a></div>"
        );
        html.push_str("  </div>\n</section>\n");
        html
    }
}

/// Error block shown in place of a report page
#[must_use]
pub fn render_hotspot_not_found_html(id: Option<&str>) -> String {
    format!(
        "<div class=\"detail-error\">\n  <h2>{HOTSPOT_NOT_FOUND_TITLE}</h2>\n  <p>{}</p>\n  <a href=\"{HOTSPOT_BOARD_PAGE}\" class=\"back-link\">{BACK_LABEL}</a>\n</div>\n",
        encode_text(&hotspot_not_found_message(id)),
    )
}

fn markup_to_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        let tag = rest[open + 1..open + close].trim().trim_end_matches('/').trim();
        match tag.to_ascii_lowercase().as_str() {
            "li" => text.push_str("\n- "),
            "br" | "p" | "/p" | "h4" | "/h4" | "ul" | "/ul" | "/li" => text.push('\n'),
            _ => {}
        }
        rest = &rest[open + close + 1..];
    }
    text.push_str(rest);

    decode_html_entities(&text)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
