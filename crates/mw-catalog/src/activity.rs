//! Activity message table for the home-page ticker

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

const ACTIVITY_JSON: &str = include_str!("../data/activity.json");

/// One canned ticker message
///
/// `kind` is free text; unknown kinds render with a fallback icon.
/// `text` may carry inline `<strong>` markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Message family, `repérage` style
    pub kind: String,
    /// Message body
    pub text: String,
}

impl ActivityEntry {
    /// New entry
    #[must_use]
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }
}

/// Parse an activity table from JSON text
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] on malformed input.
pub fn activity_from_json(text: &str) -> Result<Vec<ActivityEntry>> {
    serde_json::from_str(text).map_err(CatalogError::parse("activity"))
}

/// The compiled-in ticker messages
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the embedded JSON is malformed.
pub fn builtin_activity() -> Result<Vec<ActivityEntry>> {
    activity_from_json(ACTIVITY_JSON)
}
