//! Page links and dossier routing
//!
//! A dossier page is opened with `dossier.html?id={id}&from={page}`. The
//! `from` value only ever selects a back link from a fixed whitelist.

use std::borrow::Cow;

use mw_record::{Category, Record, RecordStore};

use crate::config::SiteConfig;
use crate::gate::Session;

/// Dossier page file name
pub const DOSSIER_PAGE: &str = "dossier.html";

/// Back link used when `from` is absent or not whitelisted
pub const FALLBACK_BACK_LINK: &str = "home.html";

/// Message shown before bouncing off an unknown id
pub const NOT_FOUND_MESSAGE: &str = "Dossier introuvable. Retour à la base de données.";

const BACK_LINKS: [(&str, &str); 4] = [
    ("mutants", "mutants.html"),
    ("superiors", "superiors.html"),
    ("hotspot", "hotspot.html"),
    ("home", "home.html"),
];

/// Page name of a path: last segment without `.html`
///
/// `/site/mutants.html` gives `mutants`.
#[must_use]
pub fn origin_page(path: &str) -> &str {
    let last = path.rsplit('/').next().unwrap_or(path);
    last.strip_suffix(".html").unwrap_or(last)
}

/// Page name of the list page showing `category`
#[must_use]
pub const fn list_page(category: Category) -> &'static str {
    match category {
        Category::Mutant => "mutants",
        Category::Superior => "superiors",
    }
}

/// Link to a dossier page remembering the origin page
#[must_use]
pub fn dossier_link(id: &str, from: &str) -> String {
    format!(
        "{DOSSIER_PAGE}?id={}&from={}",
        urlencoding::encode(id),
        urlencoding::encode(from)
    )
}

/// Whitelisted back link for an origin page
#[must_use]
pub fn back_link(from: Option<&str>) -> &'static str {
    from.and_then(|from| {
        BACK_LINKS
            .iter()
            .find(|(page, _)| *page == from)
            .map(|(_, link)| *link)
    })
    .unwrap_or(FALLBACK_BACK_LINK)
}

/// Where a dossier request ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DossierRoute<'s> {
    /// No access yet; go to the gate
    RedirectToGate {
        /// Gate page
        target: String,
    },
    /// No id in the request
    RedirectHome {
        /// Home page
        target: String,
    },
    /// Id matches no record; show [`NOT_FOUND_MESSAGE`] then go home
    NotFound {
        /// Id as requested
        id: String,
        /// Home page
        target: String,
    },
    /// Render this record
    Show {
        /// Resolved record
        record: &'s Record,
        /// Whitelisted back link
        back_link: &'static str,
    },
}

/// Resolves dossier requests against a store
#[derive(Debug, Clone)]
pub struct Router {
    gate_page: String,
    home_page: String,
}

impl Router {
    /// Router for the given gate and home pages
    #[must_use]
    pub fn new(gate_page: impl Into<String>, home_page: impl Into<String>) -> Self {
        Self {
            gate_page: gate_page.into(),
            home_page: home_page.into(),
        }
    }

    /// Router built from site settings
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.gate_page.clone(), config.home_page.clone())
    }

    /// Route a dossier request given its query string
    ///
    /// The access check comes first; an empty `id` counts as missing.
    pub fn resolve_dossier<'s>(
        &self,
        session: &Session,
        store: &'s RecordStore,
        query: &str,
    ) -> DossierRoute<'s> {
        if !session.is_granted() {
            return DossierRoute::RedirectToGate {
                target: self.gate_page.clone(),
            };
        }

        let id = query_param(query, "id").filter(|id| !id.is_empty());
        let from = query_param(query, "from");

        let Some(id) = id else {
            return DossierRoute::RedirectHome {
                target: self.home_page.clone(),
            };
        };

        match store.get_by_id(&id) {
            Some(record) => {
                tracing::debug!(id = %id, "Opening dossier");
                DossierRoute::Show {
                    record,
                    back_link: back_link(from.as_deref()),
                }
            }
            None => {
                tracing::warn!(id = %id, "Dossier not found");
                DossierRoute::NotFound {
                    id,
                    target: self.home_page.clone(),
                }
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

/// First value of `key` in a URL query string, percent-decoded
fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value).map_or_else(|_| value.clone(), Cow::into_owned)
        })
}
