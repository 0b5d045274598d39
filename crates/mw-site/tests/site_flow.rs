//! End-to-end page flows over the built-in catalog.

use std::io::Write;

use mw_site::{
    back_link, dossier_link, origin_page, AccessGate, ActivityFeed, ConfigError, DossierRoute,
    Router, Session, SiteConfig, FALLBACK_BACK_LINK,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn write_config(suffix: &str, text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn config_loads_from_toml_file() {
    let file = write_config(".toml", "access_key = \"xavier\"\nfeed_size = 4\n");

    let config = SiteConfig::from_path(file.path()).unwrap();

    assert_eq!(config.access_key, "xavier");
    assert_eq!(config.feed_size, 4);
    assert_eq!(config.home_page, "home.html");
}

#[test]
fn config_loads_from_yaml_file() {
    let file = write_config(".yml", "placeholder_image: img/none.png\n");

    let config = SiteConfig::from_path(file.path()).unwrap();

    assert_eq!(config.placeholder_image, "img/none.png");
}

#[test]
fn config_rejects_unknown_extension_and_missing_file() {
    let file = write_config(".ini", "access_key=TRASK\n");
    assert!(matches!(
        SiteConfig::from_path(file.path()),
        Err(ConfigError::UnsupportedFormat { .. })
    ));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        SiteConfig::from_path(dir.path().join("absent.toml")),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn gate_then_dossier_flow() {
    let config = SiteConfig::default();
    let store = mw_catalog::builtin_store_with(&config.dossier_defaults()).unwrap();
    let gate = AccessGate::from_config(&config);
    let router = Router::from_config(&config);
    let mut session = Session::new();

    let link = dossier_link("HS-017", origin_page("/site/superiors.html"));
    let query = link.split_once('?').map(|(_, q)| q).unwrap();

    assert!(matches!(
        router.resolve_dossier(&session, &store, query),
        DossierRoute::RedirectToGate { .. }
    ));

    assert!(gate.check("trask", &mut session).is_granted());

    match router.resolve_dossier(&session, &store, query) {
        DossierRoute::Show { record, back_link } => {
            assert_eq!(record.alias(), "Scarlet Witch");
            assert_eq!(record.danger_level(), "Extrême");
            assert_eq!(back_link, "superiors.html");
        }
        other => panic!("unexpected route: {other:?}"),
    }
}

#[test]
fn builtin_feed_uses_configured_size() {
    let config = SiteConfig::default();
    let feed = ActivityFeed::builtin().unwrap();

    let items = feed.generate(&mut StdRng::seed_from_u64(2025), config.feed_size);

    assert_eq!(items.len(), 6);
    assert!(items.windows(2).all(|w| w[0].stamp >= w[1].stamp));
}

proptest! {
    #[test]
    fn prop_back_link_is_always_whitelisted(from in ".{0,16}") {
        let link = back_link(Some(&from));
        prop_assert!(
            ["mutants.html", "superiors.html", "hotspot.html", "home.html"].contains(&link)
        );
        if !["mutants", "superiors", "hotspot", "home"].contains(&from.as_str()) {
            prop_assert_eq!(link, FALLBACK_BACK_LINK);
        }
    }

    #[test]
    fn prop_feed_size_is_min_of_count_and_table(count in 0usize..40, seed in any::<u64>()) {
        let feed = ActivityFeed::builtin().unwrap();
        let items = feed.generate(&mut StdRng::seed_from_u64(seed), count);

        prop_assert_eq!(items.len(), count.min(feed.entries().len()));
    }

    #[test]
    fn prop_dossier_link_resolves_to_its_record(index in 0usize..37) {
        let store = mw_catalog::builtin_store().unwrap();
        let record = &store.all()[index];
        let mut session = Session::new();
        session.grant();

        let link = dossier_link(record.id().as_str(), "mutants");
        let query = link.split_once('?').map(|(_, q)| q).unwrap();

        let routed = matches!(
            Router::default().resolve_dossier(&session, &store, query),
            DossierRoute::Show { record: shown, .. } if shown.id() == record.id()
        );
        prop_assert!(routed);
    }
}
