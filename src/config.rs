//! Configuration for the TMDB adapter
//!
//! Everything is read from the process environment once, at startup:
//! - `TMDB_API_KEY` - bearer token for the TMDB API (required)
//! - `TMDB_API_BASE_URL` - alternative API host, e.g. a local mock server
//! - `TMDB_WEB_BASE_URL` - alternative website host used for movie links
//!
//! The resulting [`Config`] is passed explicitly to the API client and the
//! suggestion builder; nothing else looks at the environment.

use crate::constants::{
    TMDB_API_BASE_URL, TMDB_API_BASE_URL_ENV, TMDB_API_KEY_ENV, TMDB_BASE_URL,
    TMDB_WEB_BASE_URL_ENV,
};
use std::{env, fmt};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No TMDB API key set.")]
    MissingApiKey,
}

/// Runtime settings shared by every action
#[derive(Clone)]
pub struct Config {
    /// Bearer credential sent with every API request
    pub api_key: String,
    /// API host without the version segment or a trailing slash
    pub api_base_url: String,
    /// Website host without a trailing slash
    pub web_base_url: String,
}

impl Config {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    ///
    /// An unset or empty API key is rejected; empty base URL overrides fall
    /// back to the public TMDB hosts.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(TMDB_API_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = |name: &str, default: &str| {
            lookup(name)
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Config {
            api_key,
            api_base_url: base_url(TMDB_API_BASE_URL_ENV, TMDB_API_BASE_URL),
            web_base_url: base_url(TMDB_WEB_BASE_URL_ENV, TMDB_BASE_URL),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("web_base_url", &self.web_base_url)
            .finish()
    }
}
