//! The [`SearchTermStore`] trait defining the storage contract.
//!
//! All backends (InMemoryStore, SqliteStore) implement this trait, so the
//! server and CLI can swap them without changing request handling.

use greeter_core::SearchTerm;

use crate::error::StorageError;
use crate::types::{SearchTermId, StoredSearchTerm};

/// The storage contract for search terms.
///
/// The trait is synchronous. Callers on an async runtime hold the store
/// behind a `tokio::sync::Mutex` and keep each call short.
pub trait SearchTermStore {
    /// Persists one record for `term` and returns its newly allocated ID.
    ///
    /// No duplicate check: saving the same text twice creates two records.
    fn save(&mut self, term: &SearchTerm) -> Result<SearchTermId, StorageError>;

    /// Lists up to `limit` records, newest first.
    fn list(&self, limit: usize) -> Result<Vec<StoredSearchTerm>, StorageError>;

    /// Total number of stored records.
    fn count(&self) -> Result<u64, StorageError>;
}
