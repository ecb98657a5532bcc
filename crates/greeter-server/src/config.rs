//! Server configuration from environment variables.
//!
//! - `GREETER_DB_PATH`: SQLite database file path (default: "greeter.db")
//! - `GREETER_PORT`: Server listen port (default: "8000")
//! - `GREETER_JOKE_API_URL`: Joke API base URL (default: icanhazdadjoke.com)

use crate::joke_client::DEFAULT_JOKE_API_URL;

pub const DB_PATH_VAR: &str = "GREETER_DB_PATH";
pub const PORT_VAR: &str = "GREETER_PORT";
pub const JOKE_API_URL_VAR: &str = "GREETER_JOKE_API_URL";

const DEFAULT_DB_PATH: &str = "greeter.db";
const DEFAULT_PORT: u16 = 8000;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var} value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub db_path: String,
    pub port: u16,
    pub joke_api_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            db_path: DEFAULT_DB_PATH.to_string(),
            port: DEFAULT_PORT,
            joke_api_url: DEFAULT_JOKE_API_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads the process environment. Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(db_path) = lookup(DB_PATH_VAR) {
            config.db_path = db_path;
        }

        if let Some(raw) = lookup(PORT_VAR) {
            config.port = raw.trim().parse::<u16>().map_err(|err: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: PORT_VAR,
                    value: raw.clone(),
                    reason: err.to_string(),
                }
            })?;
        }

        if let Some(url) = lookup(JOKE_API_URL_VAR) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    var: JOKE_API_URL_VAR,
                    value: url,
                    reason: "expected an http:// or https:// URL".to_string(),
                });
            }
            config.joke_api_url = url;
        }

        Ok(config)
    }

    /// Address the listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
