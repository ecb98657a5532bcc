//! Storage-layer types for search term records.
//!
//! [`SearchTermId`] lives here rather than in greeter-core because record
//! identity is a storage concern: a term only gains an ID when persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored search term.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SearchTermId(pub i64);

impl fmt::Display for SearchTermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SearchTermId({})", self.0)
    }
}

/// A persisted search term record (for listing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSearchTerm {
    /// Record identifier.
    pub id: SearchTermId,
    /// The text exactly as submitted.
    pub search_term: String,
    /// UTC timestamp of the write, RFC 3339 formatted.
    pub created_at: String,
}
