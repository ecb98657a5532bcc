//! Search term submission request type.

use serde::Deserialize;

/// Body of `POST /api/submit/`.
///
/// The field is required: a body without it is rejected by the JSON
/// extractor before the handler runs.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    /// The text to search for and record.
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}
