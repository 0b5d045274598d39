//! Identity and classification types
//!
//! Closed enumerations for [`Category`] and [`ClassTier`], plus the
//! [`RecordId`] key used for lookups and dossier links.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Stable dossier identifier (e.g. `M-001`, `HS-010`)
///
/// Used as lookup key in the store and as the `id` parameter of dossier
/// links. Borrowing as `str` lets callers look up records without
/// allocating.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create identifier from any string-like value
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier has no visible characters
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Borrow<str> for RecordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Top-level classification, fixed at authoring time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Gene-based mutant
    Mutant,

    /// "Homo Superior": aliens, magic users, enhanced humans
    Superior,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Self; 2] = [Self::Mutant, Self::Superior];

    /// Wire token (`mutant` / `superior`)
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mutant => "mutant",
            Self::Superior => "superior",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mutant" => Ok(Self::Mutant),
            "superior" => Ok(Self::Superior),
            other => Err(ParseTypeError::UnknownCategory(other.to_string())),
        }
    }
}

/// Threat/power tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum ClassTier {
    /// Alpha tier
    Alpha,

    /// Beta tier, the fallback for blank or unknown input
    #[default]
    Beta,

    /// Gamma tier
    Gamma,

    /// Delta tier
    Delta,

    /// Omega tier
    Omega,
}

impl ClassTier {
    /// Every tier
    pub const ALL: [Self; 5] = [Self::Alpha, Self::Beta, Self::Gamma, Self::Delta, Self::Omega];

    /// Display name (`Alpha` … `Omega`)
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "Alpha",
            Self::Beta => "Beta",
            Self::Gamma => "Gamma",
            Self::Delta => "Delta",
            Self::Omega => "Omega",
        }
    }

    /// Lower-cased token used for badge style selection
    #[inline]
    #[must_use]
    pub const fn style_token(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Gamma => "gamma",
            Self::Delta => "delta",
            Self::Omega => "omega",
        }
    }
}

impl Display for ClassTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassTier {
    type Err = ParseTypeError;

    /// Case-insensitive on the trimmed input
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseTypeError::UnknownClassTier(trimmed.to_string()))
    }
}

/// Errors parsing closed enumerations from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTypeError {
    /// Not `mutant` or `superior`
    #[error("unknown category: '{0}'")]
    UnknownCategory(String),

    /// Not one of `Alpha|Beta|Gamma|Delta|Omega`
    #[error("unknown class tier: '{0}'")]
    UnknownClassTier(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_borrows_as_str() {
        let id = RecordId::new("M-001");
        let borrowed: &str = id.borrow();

        assert_eq!(borrowed, "M-001");
        assert_eq!(id.to_string(), "M-001");
    }

    #[test]
    fn record_id_blank_detection() {
        assert!(RecordId::new("   ").is_blank());
        assert!(RecordId::new("").is_blank());
        assert!(!RecordId::new("HS-010").is_blank());
    }

    #[test]
    fn category_round_trips_through_text() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!(" Superior ".parse::<Category>().unwrap(), Category::Superior);
    }

    #[test]
    fn category_rejects_unknown() {
        let err = "alien".parse::<Category>().unwrap_err();
        assert_eq!(err, ParseTypeError::UnknownCategory("alien".into()));
    }

    #[test]
    fn category_serde_uses_lowercase_tokens() {
        let json = serde_json::to_string(&Category::Superior).unwrap();
        assert_eq!(json, "\"superior\"");

        let parsed: Category = serde_json::from_str("\"mutant\"").unwrap();
        assert_eq!(parsed, Category::Mutant);
    }

    #[test]
    fn class_tier_parse_is_case_insensitive() {
        assert_eq!("omega".parse::<ClassTier>().unwrap(), ClassTier::Omega);
        assert_eq!("  ALPHA ".parse::<ClassTier>().unwrap(), ClassTier::Alpha);
        assert!("Epsilon".parse::<ClassTier>().is_err());
    }

    #[test]
    fn class_tier_default_is_beta() {
        assert_eq!(ClassTier::default(), ClassTier::Beta);
    }

    #[test]
    fn class_tier_style_token_is_lowercase_name() {
        for tier in ClassTier::ALL {
            assert_eq!(tier.style_token(), tier.as_str().to_lowercase());
        }
    }
}
