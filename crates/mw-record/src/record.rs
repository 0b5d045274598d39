//! Dossier records and their three construction layers
//!
//! A [`Record`] is produced by stacking, in strict order:
//! 1. [`DossierDefaults`]: the global default values
//! 2. [`RawRecord`]: the authored record literal
//! 3. [`RecordPatch`]: optional curated overrides keyed by id
//!
//! then normalizing `name`, `alias` and `class`. Only resolved records
//! leave this crate; their fields are read-only.

use crate::types::{Category, ClassTier, RecordId};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Image handle shared by records that have no portrait of their own
pub const PLACEHOLDER_IMAGE: &str = "assets/img/unknow.jpeg";

/// Patch table: record id -> overrides, in authoring order
pub type PatchTable = IndexMap<RecordId, RecordPatch>;

/// Authored record as written in the dataset
///
/// Every field except `id` and `category` may be absent. Sequence fields
/// accept malformed input and coerce it instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Unique identifier
    pub id: RecordId,

    /// Fixed classification
    pub category: Category,

    /// Civil name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Code name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Class tier as authored text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Portrait handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Known powers
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::lenient_strings::deserialize"
    )]
    pub powers: Option<Vec<String>>,

    /// Biography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Last known location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,

    /// Surveillance status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Danger assessment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danger_level: Option<String>,

    /// Operational notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Free-form labels
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::lenient_strings::deserialize"
    )]
    pub tags: Option<Vec<String>>,

    /// Additional asset handles
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::lenient_strings::deserialize"
    )]
    pub media: Option<Vec<String>>,
}

impl RawRecord {
    /// Create a raw record with only the mandatory fields
    #[must_use]
    pub fn new(id: impl Into<RecordId>, category: Category) -> Self {
        Self {
            id: id.into(),
            category,
            name: None,
            alias: None,
            class: None,
            image: None,
            powers: None,
            bio: None,
            last_seen: None,
            status: None,
            danger_level: None,
            notes: None,
            tags: None,
            media: None,
        }
    }

    /// With civil name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// With code name
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// With class tier text
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// With portrait handle
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// With powers
    #[must_use]
    pub fn with_powers<I, S>(mut self, powers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.powers = Some(powers.into_iter().map(Into::into).collect());
        self
    }
}

/// Curated per-record overrides
///
/// Wins over both defaults and authored values. `id` and `category` cannot
/// be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    /// Civil name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Code name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Class tier as text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Portrait handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Known powers
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::lenient_strings::deserialize"
    )]
    pub powers: Option<Vec<String>>,
    /// Biography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Last known location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
    /// Surveillance status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Danger assessment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub danger_level: Option<String>,
    /// Operational notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Free-form labels
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::lenient_strings::deserialize"
    )]
    pub tags: Option<Vec<String>>,
    /// Additional asset handles
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::lenient_strings::deserialize"
    )]
    pub media: Option<Vec<String>>,
}

impl RecordPatch {
    /// Patch that overrides nothing
    pub const EMPTY: Self = Self {
        name: None,
        alias: None,
        class: None,
        image: None,
        powers: None,
        bio: None,
        last_seen: None,
        status: None,
        danger_level: None,
        notes: None,
        tags: None,
        media: None,
    };

    /// True when no field is overridden
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::EMPTY
    }
}

/// Global default values, the bottom layer of every record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DossierDefaults {
    /// Civil name placeholder
    pub name: String,
    /// Code name placeholder
    pub alias: String,
    /// Tier when none is authored or the text is unknown
    pub class: ClassTier,
    /// Placeholder portrait
    pub image: String,
    /// Biography placeholder
    pub bio: String,
    /// Location placeholder
    pub last_seen: String,
    /// Status placeholder
    pub status: String,
    /// Danger placeholder
    pub danger_level: String,
    /// Notes placeholder
    pub notes: String,
    /// Labels every record starts with
    pub tags: Vec<String>,
    /// Asset handles every record starts with
    pub media: Vec<String>,
}

impl Default for DossierDefaults {
    fn default() -> Self {
        Self {
            name: String::new(),
            alias: String::new(),
            class: ClassTier::Beta,
            image: PLACEHOLDER_IMAGE.to_string(),
            bio: "Aucune biographie confirmée.".to_string(),
            last_seen: "Localisation inconnue".to_string(),
            status: "Non vérifié".to_string(),
            danger_level: "À évaluer".to_string(),
            notes: "Dossier incomplet. Surveillance recommandée.".to_string(),
            tags: Vec::new(),
            media: Vec::new(),
        }
    }
}

impl DossierDefaults {
    /// With a different placeholder image
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// Fully resolved dossier record
///
/// Every field holds a value after construction. Instances are only built
/// by [`Record::resolve`] and are never mutated afterwards.
///
/// Equality is field-wise and takes tag order into account.
#[derive(Debug, Clone, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    id: RecordId,
    name: String,
    alias: String,
    class: ClassTier,
    image: String,
    powers: Vec<String>,
    category: Category,
    bio: String,
    last_seen: String,
    status: String,
    danger_level: String,
    notes: String,
    tags: IndexSet<String>,
    media: Vec<String>,
}

impl Record {
    /// Stack defaults, authored values and patch, then normalize
    #[must_use]
    pub fn resolve(
        raw: &RawRecord,
        patch: Option<&RecordPatch>,
        defaults: &DossierDefaults,
    ) -> Self {
        let empty = RecordPatch::EMPTY;
        let patch = patch.unwrap_or(&empty);

        let class_text = patch.class.as_deref().or(raw.class.as_deref());
        let tags: Vec<String> = layer(patch.tags.as_ref(), raw.tags.as_ref(), &defaults.tags);

        let record = Self {
            id: raw.id.clone(),
            name: layer(patch.name.as_ref(), raw.name.as_ref(), &defaults.name)
                .trim()
                .to_string(),
            alias: layer(patch.alias.as_ref(), raw.alias.as_ref(), &defaults.alias)
                .trim()
                .to_string(),
            class: normalize_class(class_text, defaults.class, &raw.id),
            image: layer(patch.image.as_ref(), raw.image.as_ref(), &defaults.image),
            powers: patch
                .powers
                .as_ref()
                .or(raw.powers.as_ref())
                .cloned()
                .unwrap_or_default(),
            category: raw.category,
            bio: layer(patch.bio.as_ref(), raw.bio.as_ref(), &defaults.bio),
            last_seen: layer(patch.last_seen.as_ref(), raw.last_seen.as_ref(), &defaults.last_seen),
            status: layer(patch.status.as_ref(), raw.status.as_ref(), &defaults.status),
            danger_level: layer(
                patch.danger_level.as_ref(),
                raw.danger_level.as_ref(),
                &defaults.danger_level,
            ),
            notes: layer(patch.notes.as_ref(), raw.notes.as_ref(), &defaults.notes),
            tags: tags.into_iter().collect(),
            media: layer(patch.media.as_ref(), raw.media.as_ref(), &defaults.media),
        };

        tracing::debug!(id = %record.id, patched = !patch.is_empty(), "resolved record");
        record
    }

    /// Unique identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Civil name, trimmed
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Code name, trimmed
    #[inline]
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Class tier
    #[inline]
    #[must_use]
    pub fn class(&self) -> ClassTier {
        self.class
    }

    /// Portrait handle
    #[inline]
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Powers in authored order
    #[inline]
    #[must_use]
    pub fn powers(&self) -> &[String] {
        &self.powers
    }

    /// Fixed classification
    #[inline]
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Biography
    #[inline]
    #[must_use]
    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Last known location
    #[inline]
    #[must_use]
    pub fn last_seen(&self) -> &str {
        &self.last_seen
    }

    /// Surveillance status
    #[inline]
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Danger assessment
    #[inline]
    #[must_use]
    pub fn danger_level(&self) -> &str {
        &self.danger_level
    }

    /// Operational notes
    #[inline]
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Labels, deduplicated, first-seen order
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &IndexSet<String> {
        &self.tags
    }

    /// Additional asset handles
    #[inline]
    #[must_use]
    pub fn media(&self) -> &[String] {
        &self.media
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        // IndexSet equality ignores order
        self.id == other.id
            && self.category == other.category
            && self.name == other.name
            && self.alias == other.alias
            && self.class == other.class
            && self.image == other.image
            && self.powers == other.powers
            && self.bio == other.bio
            && self.last_seen == other.last_seen
            && self.status == other.status
            && self.danger_level == other.danger_level
            && self.notes == other.notes
            && self.tags.iter().eq(other.tags.iter())
            && self.media == other.media
    }
}

/// Patch wins, then authored value, then default
fn layer<T: Clone>(patched: Option<&T>, authored: Option<&T>, fallback: &T) -> T {
    patched.or(authored).unwrap_or(fallback).clone()
}

fn normalize_class(text: Option<&str>, fallback: ClassTier, id: &RecordId) -> ClassTier {
    match text.map(str::trim) {
        None | Some("") => fallback,
        Some(tier) => tier.parse().unwrap_or_else(|err| {
            tracing::warn!(%id, %err, fallback = %fallback, "unrecognised class tier");
            fallback
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wolverine() -> RawRecord {
        RawRecord::new("M-001", Category::Mutant)
            .with_name("LOGAN")
            .with_alias("Wolverine")
            .with_class("Beta")
            .with_image("assets/img/wolverine.jpeg")
            .with_powers(["Régénération", "Squelette Adamantium", "Griffes"])
    }

    #[test]
    fn defaults_fill_absent_fields() {
        let defaults = DossierDefaults::default();
        let record = Record::resolve(&wolverine(), None, &defaults);

        assert_eq!(record.bio(), defaults.bio);
        assert_eq!(record.last_seen(), "Localisation inconnue");
        assert_eq!(record.status(), "Non vérifié");
        assert_eq!(record.danger_level(), "À évaluer");
        assert_eq!(record.notes(), defaults.notes);
        assert!(record.tags().is_empty());
        assert!(record.media().is_empty());
    }

    #[test]
    fn authored_values_override_defaults() {
        let mut raw = wolverine();
        raw.status = Some("Disparu".into());

        let record = Record::resolve(&raw, None, &DossierDefaults::default());
        assert_eq!(record.status(), "Disparu");
    }

    #[test]
    fn patch_overrides_authored_and_defaults() {
        let mut raw = wolverine();
        raw.status = Some("Disparu".into());
        let patch = RecordPatch {
            status: Some("Actif".into()),
            last_seen: Some("Westchester".into()),
            tags: Some(vec!["X-MEN".into(), "combat".into()]),
            ..RecordPatch::default()
        };

        let record = Record::resolve(&raw, Some(&patch), &DossierDefaults::default());

        assert_eq!(record.status(), "Actif");
        assert_eq!(record.last_seen(), "Westchester");
        assert_eq!(record.tags().iter().collect::<Vec<_>>(), ["X-MEN", "combat"]);
        assert_eq!(record.danger_level(), "À évaluer");
    }

    #[test]
    fn equality_sees_tag_order() {
        let defaults = DossierDefaults::default();
        let tagged = |tags: &[&str]| RecordPatch {
            tags: Some(tags.iter().map(ToString::to_string).collect()),
            ..RecordPatch::default()
        };

        let ab = Record::resolve(&wolverine(), Some(&tagged(&["a", "b"])), &defaults);
        let ba = Record::resolve(&wolverine(), Some(&tagged(&["b", "a"])), &defaults);
        let ab_again = Record::resolve(&wolverine(), Some(&tagged(&["a", "b", "a"])), &defaults);

        assert_ne!(ab, ba);
        assert_eq!(ab, ab_again);
    }

    #[test]
    fn name_alias_class_are_trimmed() {
        let raw = RawRecord::new("M-002", Category::Mutant)
            .with_name("  HANK MCCOY ")
            .with_alias("\tBeast\n")
            .with_class("  Omega  ");

        let record = Record::resolve(&raw, None, &DossierDefaults::default());

        assert_eq!(record.name(), "HANK MCCOY");
        assert_eq!(record.alias(), "Beast");
        assert_eq!(record.class(), ClassTier::Omega);
    }

    #[test]
    fn blank_or_absent_class_falls_back_to_beta() {
        let defaults = DossierDefaults::default();
        let blank = RawRecord::new("M-003", Category::Mutant).with_class("   ");
        let absent = RawRecord::new("M-004", Category::Mutant);

        assert_eq!(Record::resolve(&blank, None, &defaults).class(), ClassTier::Beta);
        assert_eq!(Record::resolve(&absent, None, &defaults).class(), ClassTier::Beta);
    }

    #[test]
    fn unknown_class_falls_back_to_beta() {
        let raw = RawRecord::new("M-005", Category::Mutant).with_class("Epsilon");
        let record = Record::resolve(&raw, None, &DossierDefaults::default());

        assert_eq!(record.class(), ClassTier::Beta);
    }

    #[test]
    fn patched_class_is_normalized_too() {
        let patch = RecordPatch {
            class: Some(" alpha ".into()),
            ..RecordPatch::default()
        };
        let record = Record::resolve(&wolverine(), Some(&patch), &DossierDefaults::default());

        assert_eq!(record.class(), ClassTier::Alpha);
    }

    #[test]
    fn missing_powers_become_empty() {
        let raw = RawRecord::new("M-006", Category::Mutant);
        let record = Record::resolve(&raw, None, &DossierDefaults::default());

        assert!(record.powers().is_empty());
    }

    #[test]
    fn missing_name_and_alias_become_empty_strings() {
        let raw = RawRecord::new("M-008", Category::Superior);
        let record = Record::resolve(&raw, None, &DossierDefaults::default());

        assert_eq!(record.name(), "");
        assert_eq!(record.alias(), "");
        assert_eq!(record.image(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn duplicate_tags_collapse_in_first_seen_order() {
        let patch = RecordPatch {
            tags: Some(vec!["psy".into(), "X-MEN".into(), "psy".into()]),
            ..RecordPatch::default()
        };
        let record = Record::resolve(&wolverine(), Some(&patch), &DossierDefaults::default());

        assert_eq!(record.tags().iter().collect::<Vec<_>>(), ["psy", "X-MEN"]);
    }

    #[test]
    fn category_is_never_patched() {
        let json = r#"{ "category": "superior", "status": "Actif" }"#;
        let patch: RecordPatch = serde_json::from_str(json).unwrap();
        let record = Record::resolve(&wolverine(), Some(&patch), &DossierDefaults::default());

        assert_eq!(record.category(), Category::Mutant);
        assert_eq!(record.status(), "Actif");
    }

    #[test]
    fn raw_record_deserializes_with_coercion() {
        let json = r#"{
            "id": "M-022",
            "category": "mutant",
            "name": "SEAN CASSIDY",
            "powers": "Cri sonique"
        }"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();

        assert_eq!(raw.powers, Some(Vec::new()));
        assert_eq!(raw.alias, None);
    }

    #[test]
    fn raw_record_requires_category() {
        let json = r#"{ "id": "M-022" }"#;
        assert!(serde_json::from_str::<RawRecord>(json).is_err());
    }

    #[test]
    fn empty_patch_detection() {
        assert!(RecordPatch::default().is_empty());
        let patch = RecordPatch {
            notes: Some("x".into()),
            ..RecordPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
