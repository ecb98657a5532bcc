//! Greeter command-line tools.
//!
//! Provides the `greeter` binary:
//! - `joke` looks up a dad joke for a search term and prints it, using the
//!   same `JokeClient::lookup` the HTTP server calls
//! - `history` prints the search terms recorded in a database

use std::io::{self, Write};
use std::process;

use clap::{Parser, Subcommand};

use greeter_core::SearchTerm;
use greeter_server::joke_client::{JokeClient, DEFAULT_JOKE_API_URL};
use greeter_storage::{SearchTermStore, SqliteStore};

/// Dad joke lookup and search term history.
#[derive(Parser)]
#[command(name = "greeter", about = "Dad joke lookup and search term history")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Look up a joke for a search term and print it.
    Joke {
        /// The search term.
        term: String,

        /// Joke API base URL.
        #[arg(long, default_value = DEFAULT_JOKE_API_URL)]
        api_url: String,

        /// Also record the term in this database file.
        #[arg(short, long)]
        db: Option<String>,
    },

    /// Print recorded search terms, newest first.
    History {
        /// Path to the database file.
        #[arg(short, long)]
        db: String,

        /// Maximum number of records to print.
        #[arg(short, long, default_value_t = 20)]
        limit: usize,

        /// Print records as a JSON array.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    let exit_code = match cli.command {
        Commands::Joke { term, api_url, db } => {
            run_joke(term, &api_url, db.as_deref(), &mut stdout).await
        }
        Commands::History { db, limit, json } => run_history(&db, limit, json, &mut stdout),
    };
    process::exit(exit_code);
}

/// Execute the joke subcommand.
///
/// Returns exit code: 0 = success, 1 = invalid term or lookup failure,
/// 3 = storage or output error.
async fn run_joke(
    text: String,
    api_url: &str,
    db_path: Option<&str>,
    out: &mut impl Write,
) -> i32 {
    let term = match SearchTerm::new(text) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if let Some(path) = db_path {
        let saved = SqliteStore::new(path).and_then(|mut store| store.save(&term));
        if let Err(e) = saved {
            eprintln!("Error: failed to record search term in '{}': {}", path, e);
            return 3;
        }
    }

    let client = match JokeClient::new(api_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match client.lookup(&term).await {
        Ok(joke) => match writeln!(out, "{}", joke) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: failed to write output: {}", e);
                3
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Execute the history subcommand.
///
/// The database must already exist; a mistyped path is an error rather than
/// a fresh empty database.
///
/// Returns exit code: 0 = success, 3 = storage or output error.
fn run_history(db_path: &str, limit: usize, json: bool, out: &mut impl Write) -> i32 {
    let store = match SqliteStore::open_existing(db_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", db_path, e);
            return 3;
        }
    };

    let records = match store.list(limit) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: failed to list search terms: {}", e);
            return 3;
        }
    };

    let written = if json {
        let rendered = serde_json::to_string_pretty(&records).unwrap_or_else(|e| {
            format!("{{\"error\": \"failed to serialize records: {}\"}}", e)
        });
        writeln!(out, "{}", rendered)
    } else {
        records.iter().try_for_each(|record| {
            writeln!(
                out,
                "{}\t{}\t{}",
                record.id.0, record.created_at, record.search_term
            )
        })
    };

    match written {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: failed to write output: {}", e);
            3
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn recorded(path: &str) -> Vec<String> {
        SqliteStore::open_existing(path)
            .unwrap()
            .list(usize::MAX)
            .unwrap()
            .into_iter()
            .map(|r| r.search_term)
            .collect()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn joke_defaults_to_public_api() {
        let cli = Cli::try_parse_from(["greeter", "joke", "cat"]).unwrap();
        match cli.command {
            Commands::Joke { term, api_url, db } => {
                assert_eq!(term, "cat");
                assert_eq!(api_url, "https://icanhazdadjoke.com");
                assert!(db.is_none());
            }
            _ => panic!("expected joke subcommand"),
        }
    }

    #[test]
    fn history_requires_db() {
        assert!(Cli::try_parse_from(["greeter", "history"]).is_err());
    }

    #[test]
    fn history_prints_recorded_terms() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");
        let path = path.to_str().unwrap();

        let mut store = SqliteStore::new(path).unwrap();
        store.save(&SearchTerm::new("owl").unwrap()).unwrap();
        drop(store);

        let mut out = Vec::new();
        assert_eq!(run_history(path, 10, false, &mut out), 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\towl"), "unexpected output: {}", text);

        let mut out = Vec::new();
        assert_eq!(run_history(path, 10, true, &mut out), 0);
        let listed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(listed[0]["search_term"], "owl");
    }

    #[test]
    fn history_on_missing_database_fails_without_creating_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo.db");

        let mut out = Vec::new();
        assert_eq!(run_history(path.to_str().unwrap(), 10, false, &mut out), 3);
        assert!(out.is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn joke_rejects_empty_term() {
        let mut out = Vec::new();
        assert_eq!(
            run_joke(String::new(), DEFAULT_JOKE_API_URL, None, &mut out).await,
            1
        );
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn joke_prints_match() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/search").query_param("term", "cat");
                then.status(200).json_body(json!({
                    "total_jokes": 1,
                    "results": [{"joke": "Why did the cat..."}]
                }));
            })
            .await;

        let mut out = Vec::new();
        let code = run_joke("cat".to_string(), &server.base_url(), None, &mut out).await;

        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "Why did the cat...\n");
        api_mock.assert_async().await;
    }

    #[tokio::test]
    async fn joke_with_db_records_term_once() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200)
                    .json_body(json!({"total_jokes": 0, "results": []}));
            })
            .await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jokes.db");
        let path = path.to_str().unwrap();

        let mut out = Vec::new();
        let code = run_joke("dog".to_string(), &server.base_url(), Some(path), &mut out).await;

        assert_eq!(code, 0);
        assert_eq!(recorded(path), vec!["dog"]);
    }

    #[tokio::test]
    async fn joke_records_term_even_when_lookup_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jokes.db");
        let path = path.to_str().unwrap();

        let mut out = Vec::new();
        let code = run_joke("cat".to_string(), "http://127.0.0.1:9", Some(path), &mut out).await;

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(recorded(path), vec!["cat"]);
    }

    #[tokio::test]
    async fn joke_with_unwritable_db_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a database file.
        let path = dir.path().to_str().unwrap();

        let mut out = Vec::new();
        let code = run_joke("cat".to_string(), "http://127.0.0.1:9", Some(path), &mut out).await;

        assert_eq!(code, 3);
        assert!(out.is_empty());
    }
}
