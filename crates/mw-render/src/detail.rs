//! Dossier detail view
//!
//! Produces the full field set of a dossier page from a resolved record:
//! identity block, category label, ordered powers, and the surveillance
//! narrative built from a fixed template.
//!
//! The caller resolves the id first; this module never sees a missing
//! record.

use mw_record::{Category, ClassTier, Record, RecordId};
use serde::Serialize;

/// Label for gene-based mutants
pub const MUTANT_LABEL: &str = "Mutant (Gène X)";

/// Label for every other super-powered subject
pub const SUPERIOR_LABEL: &str = "Homo Superior";

/// Human-readable category label
#[inline]
#[must_use]
pub const fn category_label(category: Category) -> &'static str {
    match category {
        Category::Mutant => MUTANT_LABEL,
        Category::Superior => SUPERIOR_LABEL,
    }
}

/// Full dossier view of one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    /// Document title, `Dossier #{id} — {alias}`
    pub title: String,
    /// Record id
    pub id: RecordId,
    /// Class tier
    pub class: ClassTier,
    /// Lower-cased tier for badge styling
    pub class_token: &'static str,
    /// Code name
    pub alias: String,
    /// Civil name
    pub name: String,
    /// Portrait handle
    pub image: String,
    /// Accessible portrait description
    pub image_alt: String,
    /// Human-readable category
    pub category_label: &'static str,
    /// One entry per power, authored order
    pub powers: Vec<String>,
    /// Surveillance block
    pub narrative: Narrative,
    /// Biography
    pub bio: String,
    /// Labels, first-seen order
    pub tags: Vec<String>,
    /// Additional asset handles
    pub media: Vec<String>,
}

/// Surveillance block shown under the portrait
///
/// All four surveillance fields are always present, placeholders included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    /// Same label as the enclosing view
    pub category_label: &'static str,
    /// Last known location
    pub last_seen: String,
    /// Surveillance status
    pub status: String,
    /// Danger assessment
    pub danger_level: String,
    /// Operational notes
    pub notes: String,
}

impl Narrative {
    /// Opening sentence naming the category
    #[must_use]
    pub fn intro(&self) -> String {
        format!(
            "Le sujet a été repéré par nos algorithmes. Son appartenance à la catégorie {} \
             nécessite une surveillance accrue.",
            self.category_label
        )
    }

    /// Plain-text rendering of the fixed template
    #[must_use]
    pub fn to_text(&self) -> String {
        format!(
            "{intro}\n\n\
             📍 Dernière localisation : {seen}\n\
             📊 Statut : {status}\n\
             ⚠️ Niveau de danger : {danger}\n\n\
             📝 Notes opérationnelles :\n{notes}",
            intro = self.intro(),
            seen = self.last_seen,
            status = self.status,
            danger = self.danger_level,
            notes = self.notes,
        )
    }
}

/// Build the dossier view of a resolved record
#[must_use]
pub fn render_detail(record: &Record) -> DetailView {
    let label = category_label(record.category());

    DetailView {
        title: format!("Dossier #{} — {}", record.id(), record.alias()),
        id: record.id().clone(),
        class: record.class(),
        class_token: record.class().style_token(),
        alias: record.alias().to_string(),
        name: record.name().to_string(),
        image: record.image().to_string(),
        image_alt: format!("Photo du sujet : {}", record.alias()),
        category_label: label,
        powers: record.powers().to_vec(),
        narrative: Narrative {
            category_label: label,
            last_seen: record.last_seen().to_string(),
            status: record.status().to_string(),
            danger_level: record.danger_level().to_string(),
            notes: record.notes().to_string(),
        },
        bio: record.bio().to_string(),
        tags: record.tags().iter().cloned().collect(),
        media: record.media().to_vec(),
    }
}
