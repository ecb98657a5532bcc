//! Storage abstraction for submitted search terms.
//!
//! Provides the [`SearchTermStore`] trait defining the storage contract, plus
//! [`InMemoryStore`] and [`SqliteStore`] as first-class backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: SearchTermId, StoredSearchTerm storage-layer types
//! - [`traits`]: SearchTermStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: migration setup for the SQLite backend
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::SearchTermStore;
pub use types::{SearchTermId, StoredSearchTerm};
