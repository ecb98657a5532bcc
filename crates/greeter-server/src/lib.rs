//! HTTP/JSON server for the greeter joke service.
//!
//! Accepts a search term, records it, looks up a matching dad joke and returns
//! it. This crate contains the server framework, the joke API client, API
//! schema types, error handling, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod joke_client;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
