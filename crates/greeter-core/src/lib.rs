//! Core data types for the greeter service.
//!
//! - [`search_term`]: the validated [`SearchTerm`] value submitted by callers
//! - [`joke`]: upstream joke search payload types and random joke selection
//! - [`error`]: [`CoreError`] for everything that can go wrong in this crate

pub mod error;
pub mod joke;
pub mod search_term;

// Re-export commonly used types
pub use error::CoreError;
pub use joke::{choose_joke, JokeResult, JokeSearchResponse, FALLBACK_MESSAGE};
pub use search_term::{SearchTerm, SEARCH_TERM_MAX_LEN};
