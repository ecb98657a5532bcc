//! Core error types for greeter-core.
//!
//! Uses `thiserror` for structured, matchable variants covering search term
//! validation and malformed joke search payloads.

use thiserror::Error;

/// Errors produced by the greeter-core crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The submitted search term was empty.
    #[error("search term must not be empty")]
    EmptySearchTerm,

    /// The submitted search term exceeds the persisted column width.
    #[error("search term is {len} characters long, the limit is {max}")]
    SearchTermTooLong { len: usize, max: usize },

    /// The upstream payload reported matches but carried no results.
    #[error("joke search reported {total_jokes} joke(s) but returned no results")]
    MissingResults { total_jokes: u64 },
}
