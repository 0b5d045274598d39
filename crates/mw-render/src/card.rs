//! File-card view for list pages

use mw_record::{ClassTier, Record, RecordId};
use serde::Serialize;

/// Separator between powers on a card
pub const POWER_SEPARATOR: &str = ", ";

/// Compact list-item view of one record
///
/// Every field is filled; default placeholder values are shown as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    /// Routing key for the dossier page
    pub id: RecordId,
    /// Class tier badge
    pub class: ClassTier,
    /// Surveillance status
    pub status: String,
    /// Portrait handle
    pub image: String,
    /// Portrait description
    pub image_alt: String,
    /// Code name
    pub alias: String,
    /// Civil name
    pub name: String,
    /// Powers joined with [`POWER_SEPARATOR`]
    pub powers: String,
}

/// Build the card view of a resolved record
#[must_use]
pub fn render_card(record: &Record) -> CardView {
    CardView {
        id: record.id().clone(),
        class: record.class(),
        status: record.status().to_string(),
        image: record.image().to_string(),
        image_alt: format!("Photo de {}", record.alias()),
        alias: record.alias().to_string(),
        name: record.name().to_string(),
        powers: record.powers().join(POWER_SEPARATOR),
    }
}

impl CardView {
    /// Card header line, `{id} // {class}`
    #[must_use]
    pub fn header(&self) -> String {
        format!("{} // {}", self.id, self.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mw_record::{Category, DossierDefaults, RawRecord};

    #[test]
    fn card_exposes_identity_and_joined_powers() {
        let raw = RawRecord::new("M-007", Category::Mutant)
            .with_name("ORORO MUNROE")
            .with_alias("Storm")
            .with_class("Omega")
            .with_image("assets/img/storm.jpeg")
            .with_powers(["Manipulation Météo", "Vol", "Électrokinésie"]);
        let record = Record::resolve(&raw, None, &DossierDefaults::default());

        let card = render_card(&record);

        assert_eq!(card.id.as_str(), "M-007");
        assert_eq!(card.class, ClassTier::Omega);
        assert_eq!(card.alias, "Storm");
        assert_eq!(card.name, "ORORO MUNROE");
        assert_eq!(card.powers, "Manipulation Météo, Vol, Électrokinésie");
        assert_eq!(card.image_alt, "Photo de Storm");
        assert_eq!(card.header(), "M-007 // Omega");
    }

    #[test]
    fn card_shows_default_status() {
        let raw = RawRecord::new("HS-099", Category::Superior).with_alias("Nobody");
        let record = Record::resolve(&raw, None, &DossierDefaults::default());

        let card = render_card(&record);

        assert_eq!(card.status, "Non vérifié");
        assert_eq!(card.powers, "");
        assert_eq!(card.image, mw_record::PLACEHOLDER_IMAGE);
    }
}
