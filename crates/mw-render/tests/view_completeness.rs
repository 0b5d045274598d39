//! Every resolved record renders to complete card and dossier views.

use mw_record::{Category, RecordPatch};
use mw_render::{
    render_card, render_card_html, render_detail, MUTANT_LABEL, POWER_SEPARATOR, SUPERIOR_LABEL,
};
use mw_test_utils::{arb_store, build_store, raw_record};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_cards_have_identity_status_and_portrait(store in arb_store(8)) {
        for record in &store {
            let card = render_card(record);

            prop_assert_eq!(&card.id, record.id());
            prop_assert!(!card.status.is_empty());
            prop_assert!(!card.image.is_empty());
            prop_assert_eq!(card.powers, record.powers().join(POWER_SEPARATOR));
        }
    }

    #[test]
    fn prop_card_json_has_every_field(store in arb_store(8)) {
        for record in &store {
            let json = serde_json::to_value(render_card(record)).unwrap();
            let fields = json.as_object().unwrap();

            for key in ["id", "class", "status", "image", "imageAlt", "alias", "name", "powers"] {
                let value = fields.get(key);
                prop_assert!(
                    value.is_some_and(serde_json::Value::is_string),
                    "{} missing on {}",
                    key,
                    record.id()
                );
            }
            prop_assert_eq!(fields.len(), 8);
        }
    }

    #[test]
    fn prop_detail_narrative_is_never_blank(store in arb_store(8)) {
        for record in &store {
            let view = render_detail(record);
            let narrative = &view.narrative;

            prop_assert!(!narrative.last_seen.is_empty());
            prop_assert!(!narrative.status.is_empty());
            prop_assert!(!narrative.danger_level.is_empty());
            prop_assert!(!narrative.notes.is_empty());
            prop_assert!(!view.bio.is_empty());

            let expected = match record.category() {
                Category::Mutant => MUTANT_LABEL,
                Category::Superior => SUPERIOR_LABEL,
            };
            prop_assert_eq!(view.category_label, expected);
            prop_assert_eq!(view.powers.len(), record.powers().len());
        }
    }
}

#[test]
fn detail_serializes_with_camel_case_keys() {
    let raw = vec![raw_record(
        "HS-012",
        Category::Superior,
        "PETER PARKER",
        "Spider-Man",
        &["Sens d'araignée", "Adhérence"],
    )];
    let mut patches = mw_record::PatchTable::new();
    patches.insert(
        "HS-012".into(),
        RecordPatch {
            last_seen: Some("Queens, New York".into()),
            ..RecordPatch::default()
        },
    );
    let store = build_store(&raw, &patches);
    let record = store.get_by_id("HS-012").unwrap();

    let json = serde_json::to_value(render_detail(record)).unwrap();

    assert_eq!(json["categoryLabel"], "Homo Superior");
    assert_eq!(json["narrative"]["lastSeen"], "Queens, New York");
    assert_eq!(json["class"], "Beta");
    assert_eq!(json["imageAlt"], "Photo du sujet : Spider-Man");
}

#[test]
fn card_html_carries_caller_link() {
    let raw = vec![raw_record("M-007", Category::Mutant, "ORORO MUNROE", "Storm", &["Vol"])];
    let store = build_store(&raw, &mw_record::PatchTable::new());
    let card = render_card(store.get_by_id("M-007").unwrap());

    let html = render_card_html(&card, "dossier.html?id=M-007");

    assert!(html.contains("href=\"dossier.html?id=M-007\""));
    assert!(html.contains("<h3>Storm</h3>"));
}
