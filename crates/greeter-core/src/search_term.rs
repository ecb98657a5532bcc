//! The [`SearchTerm`] value type.
//!
//! A search term is the literal text a caller submits. It is used verbatim
//! both as the joke API query and as the persisted record, so construction
//! only enforces what the storage column can hold.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum length of a search term, in characters.
pub const SEARCH_TERM_MAX_LEN: usize = 500;

/// A non-empty search term of at most [`SEARCH_TERM_MAX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Validates and wraps `text`. The text is kept exactly as submitted.
    pub fn new(text: impl Into<String>) -> Result<Self, CoreError> {
        let text = text.into();
        if text.is_empty() {
            return Err(CoreError::EmptySearchTerm);
        }
        let len = text.chars().count();
        if len > SEARCH_TERM_MAX_LEN {
            return Err(CoreError::SearchTermTooLong {
                len,
                max: SEARCH_TERM_MAX_LEN,
            });
        }
        Ok(SearchTerm(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for SearchTerm {
    type Error = CoreError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        SearchTerm::new(text)
    }
}

impl From<SearchTerm> for String {
    fn from(term: SearchTerm) -> Self {
        term.0
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
