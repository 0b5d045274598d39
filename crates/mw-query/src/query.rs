//! Query predicates
//!
//! Provides [`TextQuery`] (case-insensitive substring over name, alias and
//! powers), [`Query`] (optional category AND text) and the
//! [`RecordFilter`] trait they share.

use mw_record::{Category, Record};

/// Predicate over resolved records
pub trait RecordFilter {
    /// True when the record is kept
    fn matches(&self, record: &Record) -> bool;
}

impl RecordFilter for Category {
    #[inline]
    fn matches(&self, record: &Record) -> bool {
        record.category() == *self
    }
}

/// Free-text search term
///
/// Stored trimmed and lower-cased. An empty term matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    /// Normalize raw input from a search box
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.trim().to_lowercase(),
        }
    }

    /// Normalized term
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// True for the pass-through term
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    fn contained_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

impl From<&str> for TextQuery {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl RecordFilter for TextQuery {
    fn matches(&self, record: &Record) -> bool {
        if self.is_empty() {
            return true;
        }

        self.contained_in(record.name())
            || self.contained_in(record.alias())
            || record.powers().iter().any(|power| self.contained_in(power))
    }
}

/// Combined category and text query
///
/// Category is checked first; text is only evaluated for records of the
/// requested category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query {
    category: Option<Category>,
    text: TextQuery,
}

impl Query {
    /// Query that keeps everything
    #[inline]
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one category
    #[inline]
    #[must_use]
    pub fn for_category(category: Category) -> Self {
        Self {
            category: Some(category),
            text: TextQuery::default(),
        }
    }

    /// Set free-text term
    #[inline]
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = TextQuery::new(text);
        self
    }

    /// Category restriction, if any
    #[inline]
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Text term
    #[inline]
    #[must_use]
    pub fn text(&self) -> &TextQuery {
        &self.text
    }
}

impl RecordFilter for Query {
    fn matches(&self, record: &Record) -> bool {
        if let Some(category) = self.category {
            if !category.matches(record) {
                return false;
            }
        }
        self.text.matches(record)
    }
}
