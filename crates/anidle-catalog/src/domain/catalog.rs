//! The immutable record catalog.

use std::collections::HashMap;

use anidle_core::error::DomainError;
use anidle_core::rng::{DeterministicRng, pick_index};

use super::record::AnimeRecord;

/// An ordered, immutable set of anime records indexed by title.
///
/// The catalog is never empty and never holds two records with the same
/// title; both are checked once in [`Catalog::new`]. Set members are unique
/// within each record.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<AnimeRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog and its title index, normalizing each record's set
    /// members with [`AnimeRecord::normalize_members`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCatalog` if `records` is empty.
    /// Returns `DomainError::DuplicateTitle` if two records share a title.
    pub fn new(mut records: Vec<AnimeRecord>) -> Result<Self, DomainError> {
        if records.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter_mut().enumerate() {
            record.normalize_members();
            if index.insert(record.title.clone(), position).is_some() {
                return Err(DomainError::DuplicateTitle(record.title.clone()));
            }
        }

        Ok(Self { records, index })
    }

    /// All titles in catalog order.
    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.title.as_str())
    }

    /// Exact, case-sensitive lookup by title.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&AnimeRecord> {
        self.index.get(title).map(|&i| &self.records[i])
    }

    /// Picks a uniformly random record.
    ///
    /// # Panics
    ///
    /// Never in practice: the catalog is non-empty by construction.
    pub fn pick_random_answer(&self, rng: &mut dyn DeterministicRng) -> &AnimeRecord {
        let i = pick_index(rng, self.records.len()).expect("catalog is non-empty by construction");
        &self.records[i]
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
