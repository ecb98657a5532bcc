//! SQLite implementation of [`SearchTermStore`].
//!
//! [`SqliteStore`] persists search terms in a SQLite database with WAL mode
//! and automatic schema migrations.

use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection, ErrorCode};

use greeter_core::SearchTerm;

use crate::error::StorageError;
use crate::traits::SearchTermStore;
use crate::types::{SearchTermId, StoredSearchTerm};

/// SQLite-backed implementation of [`SearchTermStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens a SQLite database at `path` that must already exist.
    pub fn open_existing(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_existing_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }
}

impl SearchTermStore for SqliteStore {
    fn save(&mut self, term: &SearchTerm) -> Result<SearchTermId, StorageError> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.conn
            .execute(
                "INSERT INTO search_terms (search_term, created_at) VALUES (?1, ?2)",
                params![term.as_str(), created_at],
            )
            .map_err(|err| match err.sqlite_error_code() {
                Some(ErrorCode::ConstraintViolation) => StorageError::IntegrityError {
                    reason: err.to_string(),
                },
                _ => StorageError::Database(err),
            })?;
        let id = SearchTermId(self.conn.last_insert_rowid());
        tracing::debug!(%id, "stored search term");
        Ok(id)
    }

    fn list(&self, limit: usize) -> Result<Vec<StoredSearchTerm>, StorageError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = self.conn.prepare(
            "SELECT id, search_term, created_at FROM search_terms
             ORDER BY id DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], |row| {
            Ok(StoredSearchTerm {
                id: SearchTermId(row.get(0)?),
                search_term: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    fn count(&self) -> Result<u64, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM search_terms", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
