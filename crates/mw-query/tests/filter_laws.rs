//! Filter correctness laws checked against arbitrary stores.

use mw_query::{QueryEngine, TextQuery};
use mw_record::{Category, Record};
use mw_test_utils::{arb_category, arb_store, arb_word, small_store};
use proptest::prelude::*;

/// Reference predicate written independently of the engine
fn reference_match(record: &Record, category: Option<Category>, text: &str) -> bool {
    if category.is_some_and(|c| c != record.category()) {
        return false;
    }
    let needle = text.trim().to_lowercase();
    needle.is_empty()
        || record.name().to_lowercase().contains(&needle)
        || record.alias().to_lowercase().contains(&needle)
        || record
            .powers()
            .iter()
            .any(|p| p.to_lowercase().contains(&needle))
}

fn positions(store_ids: &[&str], hits: &[&Record]) -> Vec<usize> {
    hits.iter()
        .map(|r| {
            store_ids
                .iter()
                .position(|id| *id == r.id().as_str())
                .unwrap()
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_empty_text_selects_exactly_the_category(
        store in arb_store(10),
        category in arb_category(),
    ) {
        let engine = QueryEngine::new(&store);
        let hits = engine.filter_by_category(category, "");

        prop_assert_eq!(hits.len(), store.count_by_category(category));
        prop_assert!(hits.iter().all(|r| r.category() == category));
    }

    #[test]
    fn prop_category_filter_matches_reference(
        store in arb_store(10),
        category in arb_category(),
        text in arb_word(),
    ) {
        let engine = QueryEngine::new(&store);
        let hits = engine.filter_by_category(category, &text);

        for record in store.all() {
            let expected = reference_match(record, Some(category), &text);
            let actual = hits.iter().any(|hit| hit.id() == record.id());
            prop_assert_eq!(expected, actual, "record {}", record.id());
        }
    }

    #[test]
    fn prop_global_filter_matches_reference(store in arb_store(10), text in arb_word()) {
        let engine = QueryEngine::new(&store);
        let hits = engine.filter_global(&text);

        let expected: Vec<&Record> = store
            .all()
            .iter()
            .filter(|r| reference_match(r, None, &text))
            .collect();
        prop_assert_eq!(hits, expected);
    }

    #[test]
    fn prop_filtering_preserves_store_order(
        store in arb_store(10),
        category in arb_category(),
        text in arb_word(),
    ) {
        let engine = QueryEngine::new(&store);
        let ids: Vec<&str> = store.ids().map(|id| id.as_str()).collect();

        let by_category = positions(&ids, &engine.filter_by_category(category, &text));
        let global = positions(&ids, &engine.filter_global(&text));

        prop_assert!(by_category.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(global.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_category_hits_are_subset_of_global(
        store in arb_store(10),
        category in arb_category(),
        text in arb_word(),
    ) {
        let engine = QueryEngine::new(&store);
        let global = engine.filter_global(&text);

        for hit in engine.filter_by_category(category, &text) {
            prop_assert!(global.contains(&hit));
        }
    }

    #[test]
    fn prop_text_query_normalization_is_idempotent(text in "[ A-Za-zÉé]{0,10}") {
        let once = TextQuery::new(&text);
        let twice = TextQuery::new(once.as_str());
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn teleport_search_over_mutants() {
    let store = small_store();
    let engine = QueryEngine::new(&store);

    let ids: Vec<String> = engine
        .filter_by_category(Category::Mutant, "télépo")
        .iter()
        .map(|r| r.id().to_string())
        .collect();

    assert_eq!(ids, ["M-024", "M-025"]);
}

#[test]
fn shared_power_found_in_both_categories() {
    let store = small_store();
    let engine = QueryEngine::new(&store);

    assert_eq!(engine.filter_global("adhérence").len(), 2);
    assert_eq!(engine.filter_by_category(Category::Superior, "adhérence").len(), 1);
}
