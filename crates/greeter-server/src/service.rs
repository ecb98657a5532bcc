//! GreeterService: the single coordinator between HTTP handlers, the search
//! term store, and the joke API client.
//!
//! Handlers are thin wrappers that delegate to these methods.

use tokio::sync::Mutex;

use greeter_core::SearchTerm;
use greeter_storage::{SearchTermStore, StoredSearchTerm};

use crate::error::ApiError;
use crate::joke_client::JokeClient;

/// Boxed store so the server can run on SQLite or in memory.
pub type DynStore = Box<dyn SearchTermStore + Send>;

/// Records search terms and answers them with jokes.
///
/// The store sits behind an async mutex because `rusqlite::Connection` is
/// `!Sync`. The lock is only held for the write, never across the outbound
/// joke API call.
pub struct GreeterService {
    store: Mutex<DynStore>,
    jokes: JokeClient,
}

impl GreeterService {
    pub fn new(store: DynStore, jokes: JokeClient) -> Self {
        GreeterService {
            store: Mutex::new(store),
            jokes,
        }
    }

    /// Records `text` as a search term, then looks up a joke for it.
    ///
    /// The record is written before the lookup, so a failing joke API still
    /// leaves exactly one stored record for the request.
    pub async fn submit(&self, text: String) -> Result<String, ApiError> {
        let term = SearchTerm::new(text)?;

        let id = self.store.lock().await.save(&term)?;
        tracing::info!(%id, search_term = %term, "recorded search term");

        match self.jokes.lookup(&term).await {
            Ok(joke) => {
                tracing::debug!(%id, %joke, "answered search term");
                Ok(joke)
            }
            Err(err) => {
                tracing::warn!(
                    search_term = %term,
                    error = %err,
                    upstream_body = err.upstream_body().unwrap_or_default(),
                    "joke lookup failed"
                );
                Err(err.into())
            }
        }
    }

    /// Most recent records, newest first.
    pub async fn history(&self, limit: usize) -> Result<Vec<StoredSearchTerm>, ApiError> {
        Ok(self.store.lock().await.list(limit)?)
    }

    /// Number of records written so far.
    pub async fn recorded_count(&self) -> Result<u64, ApiError> {
        Ok(self.store.lock().await.count()?)
    }
}
