//! Joke search payload types and random joke selection.
//!
//! [`JokeSearchResponse`] mirrors the JSON body returned by the joke search
//! API. [`choose_joke`] turns one of those payloads into the single string
//! handed back to callers.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Returned when the joke search reports zero matches.
pub const FALLBACK_MESSAGE: &str = "According to my joke API, that's just not funny.";

/// Body of a joke search response.
///
/// Only the fields the service reads are modeled; paging fields and joke IDs
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokeSearchResponse {
    /// Number of jokes matching the term across all pages.
    pub total_jokes: u64,
    /// Jokes on the returned page.
    pub results: Vec<JokeResult>,
}

/// A single joke in a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokeResult {
    pub joke: String,
}

impl JokeSearchResponse {
    /// A response reporting no matches.
    pub fn empty() -> Self {
        JokeSearchResponse {
            total_jokes: 0,
            results: Vec::new(),
        }
    }

    /// Builds a response whose `total_jokes` matches the given jokes.
    pub fn from_jokes<I, S>(jokes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let results: Vec<JokeResult> = jokes
            .into_iter()
            .map(|joke| JokeResult { joke: joke.into() })
            .collect();
        JokeSearchResponse {
            total_jokes: results.len() as u64,
            results,
        }
    }
}

/// Picks the joke to return for a search response.
///
/// When `total_jokes` is zero the fallback message is returned. Otherwise one
/// entry of `results` is chosen uniformly at random with `rng`.
pub fn choose_joke<R: Rng + ?Sized>(
    response: &JokeSearchResponse,
    rng: &mut R,
) -> Result<String, CoreError> {
    if response.total_jokes == 0 {
        return Ok(FALLBACK_MESSAGE.to_string());
    }

    response
        .results
        .choose(rng)
        .map(|result| result.joke.clone())
        .ok_or(CoreError::MissingResults {
            total_jokes: response.total_jokes,
        })
}
