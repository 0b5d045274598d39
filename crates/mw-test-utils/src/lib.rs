//! Testing utilities for the Mutant Watch workspace
//!
//! Shared fixtures, record builders and proptest strategies.

#![allow(missing_docs)]

use mw_record::{Category, DossierDefaults, PatchTable, RawRecord, RecordPatch, RecordStore};
use proptest::prelude::*;

pub fn raw_record(
    id: &str,
    category: Category,
    name: &str,
    alias: &str,
    powers: &[&str],
) -> RawRecord {
    RawRecord::new(id, category)
        .with_name(name)
        .with_alias(alias)
        .with_powers(powers.iter().copied())
}

pub fn status_patch(status: &str, last_seen: &str) -> RecordPatch {
    RecordPatch {
        status: Some(status.to_string()),
        last_seen: Some(last_seen.to_string()),
        ..RecordPatch::default()
    }
}

/// Five-record store mixing both categories
pub fn small_store() -> RecordStore {
    let raw = vec![
        raw_record(
            "M-001",
            Category::Mutant,
            "LOGAN",
            "Wolverine",
            &["Régénération", "Squelette Adamantium", "Griffes"],
        )
        .with_class("Beta"),
        raw_record(
            "HS-010",
            Category::Superior,
            "THOR ODINSON",
            "Thor",
            &["Physiologie Asgardienne", "Contrôle Foudre", "Mjolnir"],
        )
        .with_class("Omega"),
        raw_record(
            "M-024",
            Category::Mutant,
            "KURT WAGNER",
            "Nightcrawler",
            &["Téléportation", "Agilité", "Adhérence"],
        )
        .with_class("Gamma"),
        raw_record(
            "HS-012",
            Category::Superior,
            "PETER PARKER",
            "Spider-Man",
            &["Sens d'araignée", "Adhérence"],
        ),
        raw_record("M-025", Category::Mutant, "CLARICE FERGUSON", "Blink", &[
            "Portails de téléportation",
        ]),
    ];

    let mut patches = PatchTable::new();
    patches.insert("M-001".into(), status_patch("Actif", "Westchester"));

    build_store(&raw, &patches)
}

pub fn build_store(raw: &[RawRecord], patches: &PatchTable) -> RecordStore {
    RecordStore::build(raw, patches, &DossierDefaults::default())
        .expect("fixture records have unique ids")
}

pub fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![Just(Category::Mutant), Just(Category::Superior)]
}

/// Short mixed-case words so substring hits are frequent
pub fn arb_word() -> impl Strategy<Value = String> {
    "[A-Ca-cÉé ]{0,6}"
}

pub fn arb_raw_record(id: String) -> impl Strategy<Value = RawRecord> {
    (
        arb_category(),
        arb_word(),
        arb_word(),
        proptest::collection::vec(arb_word(), 0..4),
    )
        .prop_map(move |(category, name, alias, powers)| {
            RawRecord::new(id.as_str(), category)
                .with_name(name)
                .with_alias(alias)
                .with_powers(powers)
        })
}

/// Store of 0..max records with unique ids
pub fn arb_store(max: usize) -> impl Strategy<Value = RecordStore> {
    (0..=max)
        .prop_flat_map(|len| {
            (0..len)
                .map(|i| arb_raw_record(format!("R-{i:03}")))
                .collect::<Vec<_>>()
        })
        .prop_map(|raw| build_store(&raw, &PatchTable::new()))
}
