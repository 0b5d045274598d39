//! Record store
//!
//! Provides [`RecordStore`], the canonical, read-only list of resolved
//! dossier records with O(1) lookup by id.

use crate::record::{DossierDefaults, PatchTable, RawRecord, Record};
use crate::types::{Category, RecordId};
use std::collections::HashMap;

/// Canonical record set
///
/// Built once from raw records and a patch table, then never mutated.
/// Records keep their authoring order, which is also the initial display
/// order of every list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    /// Resolved records in authoring order
    records: Vec<Record>,

    /// id -> position in `records`
    by_id: HashMap<RecordId, usize>,
}

impl RecordStore {
    /// Resolve every raw record and index it by id
    ///
    /// # Errors
    /// Returns error if an id is blank or appears twice. Malformed field
    /// values never fail construction.
    pub fn build(
        raw: &[RawRecord],
        patches: &PatchTable,
        defaults: &DossierDefaults,
    ) -> Result<Self, StoreError> {
        let mut records = Vec::with_capacity(raw.len());
        let mut by_id = HashMap::with_capacity(raw.len());

        for (position, authored) in raw.iter().enumerate() {
            if authored.id.is_blank() {
                return Err(StoreError::EmptyId { position });
            }
            if by_id.contains_key(&authored.id) {
                return Err(StoreError::DuplicateId {
                    id: authored.id.clone(),
                });
            }

            let record = Record::resolve(authored, patches.get(&authored.id), defaults);
            by_id.insert(authored.id.clone(), records.len());
            records.push(record);
        }

        for orphan in patches.keys().filter(|id| !by_id.contains_key(*id)) {
            tracing::warn!(id = %orphan, "patch entry matches no record, ignored");
        }

        tracing::info!(
            records = records.len(),
            patches = patches.len(),
            "record store built"
        );

        Ok(Self { records, by_id })
    }

    /// Store with no records
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// All records in authoring order
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Lookup by id
    ///
    /// Absence is a normal outcome; the caller decides where to go next.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Record> {
        self.by_id.get(id).map(|&position| &self.records[position])
    }

    /// Check if a record with this id exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Ids in authoring order
    pub fn ids(&self) -> impl Iterator<Item = &RecordId> + '_ {
        self.records.iter().map(Record::id)
    }

    /// Number of records in a category
    #[must_use]
    pub fn count_by_category(&self, category: Category) -> usize {
        self.records
            .iter()
            .filter(|record| record.category() == category)
            .count()
    }

    /// Total record count
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Errors building a [`RecordStore`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Raw record without a usable id
    #[error("record at position {position} has an empty id")]
    EmptyId {
        /// Index in the raw list
        position: usize,
    },

    /// Two raw records share an id
    #[error("duplicate record id: {id}")]
    DuplicateId {
        /// The repeated id
        id: RecordId,
    },
}
