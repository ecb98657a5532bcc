//! Application state shared by all handlers.
//!
//! [`AppState`] wraps the [`GreeterService`] in an `Arc` so it can be cloned
//! into every axum handler task.

use std::sync::Arc;

use greeter_storage::{InMemoryStore, SqliteStore};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::joke_client::JokeClient;
use crate::service::{DynStore, GreeterService};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GreeterService>,
}

impl AppState {
    /// Creates a new `AppState` backed by the SQLite database and joke API
    /// named in `config`.
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let store = SqliteStore::new(&config.db_path)?;
        Self::with_store(Box::new(store), &config.joke_api_url)
    }

    /// Creates a new `AppState` with an in-memory store (for testing).
    pub fn in_memory(joke_api_url: &str) -> Result<Self, ApiError> {
        Self::with_store(Box::new(InMemoryStore::new()), joke_api_url)
    }

    pub fn with_store(store: DynStore, joke_api_url: &str) -> Result<Self, ApiError> {
        let jokes = JokeClient::new(joke_api_url)?;
        Ok(AppState {
            service: Arc::new(GreeterService::new(store, jokes)),
        })
    }
}
