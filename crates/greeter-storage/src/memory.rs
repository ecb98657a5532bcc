//! In-memory implementation of [`SearchTermStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and ephemeral runs.
//! It keeps records in a `Vec` with the same semantics as the SQLite backend.

use chrono::{SecondsFormat, Utc};

use greeter_core::SearchTerm;

use crate::error::StorageError;
use crate::traits::SearchTermStore;
use crate::types::{SearchTermId, StoredSearchTerm};

/// Vec-backed [`SearchTermStore`]. Records are kept in insertion order.
#[derive(Debug)]
pub struct InMemoryStore {
    records: Vec<StoredSearchTerm>,
    next_id: i64,
}

impl InMemoryStore {
    /// Creates an empty store. IDs start at 1 like SQLite rowids.
    pub fn new() -> Self {
        InMemoryStore {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchTermStore for InMemoryStore {
    fn save(&mut self, term: &SearchTerm) -> Result<SearchTermId, StorageError> {
        let id = SearchTermId(self.next_id);
        self.next_id += 1;
        self.records.push(StoredSearchTerm {
            id,
            search_term: term.as_str().to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        Ok(id)
    }

    fn list(&self, limit: usize) -> Result<Vec<StoredSearchTerm>, StorageError> {
        Ok(self.records.iter().rev().take(limit).cloned().collect())
    }

    fn count(&self) -> Result<u64, StorageError> {
        Ok(self.records.len() as u64)
    }
}
