//! Client for the icanhazdadjoke.com search API.
//!
//! [`JokeClient::lookup`] is the one lookup function shared by the HTTP
//! server and the CLI: one GET to `{base_url}/search?term=...`, decode the
//! payload, pick a joke.

use greeter_core::{choose_joke, CoreError, JokeSearchResponse, SearchTerm};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

/// Production joke API base URL.
pub const DEFAULT_JOKE_API_URL: &str = "https://icanhazdadjoke.com";

// The API asks clients to identify themselves.
const USER_AGENT: &str = concat!("greeter/", env!("CARGO_PKG_VERSION"));

/// Failures while talking to the joke API.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The request could not be sent or the body could not be read.
    #[error("joke API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-success status. The body is kept for
    /// logging and left out of the message, which reaches API clients.
    #[error("joke API returned {status}")]
    Status { status: StatusCode, body: String },

    /// The body was not the expected JSON shape.
    #[error("joke API response parse failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body parsed but was internally inconsistent.
    #[error("joke API response invalid: {0}")]
    Payload(#[from] CoreError),
}

// Upper bound on how much of an error body is written to the log.
const LOGGED_BODY_LIMIT: usize = 512;

impl LookupError {
    /// Leading part of the upstream body for a non-success status.
    pub fn upstream_body(&self) -> Option<&str> {
        match self {
            LookupError::Status { body, .. } => {
                let end = body
                    .char_indices()
                    .nth(LOGGED_BODY_LIMIT)
                    .map_or(body.len(), |(idx, _)| idx);
                Some(&body[..end])
            }
            _ => None,
        }
    }
}

/// Thin wrapper over a shared `reqwest::Client` bound to one API base URL.
#[derive(Debug, Clone)]
pub struct JokeClient {
    http: reqwest::Client,
    base_url: String,
}

impl JokeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(LookupError::Transport)?;
        Ok(JokeClient {
            http,
            base_url: base_url.into(),
        })
    }

    /// Runs the search and returns the decoded payload.
    pub async fn search(&self, term: &SearchTerm) -> Result<JokeSearchResponse, LookupError> {
        let endpoint = format!("{}/search", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .get(&endpoint)
            .query(&[("term", term.as_str())])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(LookupError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(LookupError::Transport)?;

        if !status.is_success() {
            return Err(LookupError::Status { status, body });
        }

        let parsed: JokeSearchResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            search_term = %term,
            total_jokes = parsed.total_jokes,
            page_size = parsed.results.len(),
            "joke search completed"
        );
        Ok(parsed)
    }

    /// Returns one random matching joke, or the fallback message when the
    /// search found nothing.
    pub async fn lookup(&self, term: &SearchTerm) -> Result<String, LookupError> {
        let response = self.search(term).await?;
        let joke = choose_joke(&response, &mut rand::thread_rng())?;
        Ok(joke)
    }
}

#[cfg(test)]
mod tests {
    use greeter_core::FALLBACK_MESSAGE;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn term(text: &str) -> SearchTerm {
        SearchTerm::new(text).unwrap()
    }

    #[tokio::test]
    async fn sends_term_and_accept_header() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search")
                    .query_param("term", "cat")
                    .header("accept", "application/json");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "total_jokes": 1,
                        "results": [{"id": "x1", "joke": "Why did the cat..."}]
                    }));
            })
            .await;

        let client = JokeClient::new(server.base_url()).unwrap();
        let joke = client.lookup(&term("cat")).await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(joke, "Why did the cat...");
    }

    #[tokio::test]
    async fn zero_matches_returns_fallback() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200)
                    .json_body(json!({"total_jokes": 0, "results": []}));
            })
            .await;

        let client = JokeClient::new(server.base_url()).unwrap();
        assert_eq!(
            client.lookup(&term("zzzznotajoke")).await.unwrap(),
            FALLBACK_MESSAGE
        );
    }

    #[tokio::test]
    async fn term_is_url_encoded() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search")
                    .query_param("term", "cats&dogs");
                then.status(200)
                    .json_body(json!({"total_jokes": 0, "results": []}));
            })
            .await;

        let client = JokeClient::new(server.base_url()).unwrap();
        client.lookup(&term("cats&dogs")).await.unwrap();
        api_mock.assert_async().await;
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200)
                    .json_body(json!({"total_jokes": 0, "results": []}));
            })
            .await;

        let client = JokeClient::new(format!("{}/", server.base_url())).unwrap();
        client.lookup(&term("cat")).await.unwrap();
        api_mock.assert_async().await;
    }

    #[tokio::test]
    async fn server_error_is_reported_with_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(503).body("maintenance");
            })
            .await;

        let client = JokeClient::new(server.base_url()).unwrap();
        let err = client.lookup(&term("cat")).await.unwrap_err();
        assert_eq!(err.upstream_body(), Some("maintenance"));
        assert!(!err.to_string().contains("maintenance"));
        match err {
            LookupError::Status { status, body } => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn logged_body_is_truncated() {
        let err = LookupError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "é".repeat(LOGGED_BODY_LIMIT * 4),
        };
        let logged = err.upstream_body().unwrap();
        assert_eq!(logged.chars().count(), LOGGED_BODY_LIMIT);
        assert_eq!(err.to_string(), "joke API returned 500 Internal Server Error");
    }

    #[tokio::test]
    async fn html_body_is_a_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let client = JokeClient::new(server.base_url()).unwrap();
        let err = client.lookup(&term("cat")).await.unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[tokio::test]
    async fn missing_fields_are_a_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200).json_body(json!({"results": []}));
            })
            .await;

        let client = JokeClient::new(server.base_url()).unwrap();
        let err = client.lookup(&term("cat")).await.unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[tokio::test]
    async fn count_without_results_is_a_payload_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200)
                    .json_body(json!({"total_jokes": 4, "results": []}));
            })
            .await;

        let client = JokeClient::new(server.base_url()).unwrap();
        let err = client.lookup(&term("cat")).await.unwrap_err();
        assert!(matches!(
            err,
            LookupError::Payload(CoreError::MissingResults { total_jokes: 4 })
        ));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let client = JokeClient::new("http://127.0.0.1:9").unwrap();
        let err = client.lookup(&term("cat")).await.unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
    }
}
