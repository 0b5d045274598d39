//! Query engine over a [`RecordStore`]

use crate::query::{Query, RecordFilter};
use mw_record::{Category, Record, RecordStore};

/// Read-only filtering front end for a record store
///
/// Results borrow from the store and keep its authoring order.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'s> {
    store: &'s RecordStore,
}

impl<'s> QueryEngine<'s> {
    /// Create engine over a built store
    #[inline]
    #[must_use]
    pub fn new(store: &'s RecordStore) -> Self {
        Self { store }
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &'s RecordStore {
        self.store
    }

    /// Records of `category` whose name, alias or a power contains `text`
    ///
    /// Empty text returns the whole category.
    #[must_use]
    pub fn filter_by_category(&self, category: Category, text: &str) -> Vec<&'s Record> {
        self.run(&Query::for_category(category).with_text(text))
    }

    /// Same text predicate across every category
    #[must_use]
    pub fn filter_global(&self, text: &str) -> Vec<&'s Record> {
        self.run(&Query::all().with_text(text))
    }

    /// Stable filter with any [`RecordFilter`]
    #[must_use]
    pub fn filter_with<F: RecordFilter + ?Sized>(&self, filter: &F) -> Vec<&'s Record> {
        self.store
            .all()
            .iter()
            .filter(|record| filter.matches(record))
            .collect()
    }

    /// Execute a combined query
    #[must_use]
    pub fn run(&self, query: &Query) -> Vec<&'s Record> {
        let hits = self.filter_with(query);
        tracing::debug!(
            category = query.category().map(Category::as_str),
            text = query.text().as_str(),
            hits = hits.len(),
            "query executed"
        );
        hits
    }
}
