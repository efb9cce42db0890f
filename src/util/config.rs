use std::{env, time::Duration};

use thiserror::Error;
use url::Url;

pub const API_URL_VAR: &str = "SHIPREWARD_API_URL";
pub const TIMEOUT_VAR: &str = "SHIPREWARD_HTTP_TIMEOUT_SECS";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{var} must be a positive number of seconds (got '{value}')")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Runtime settings read from the environment at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the tracking API. Unset means bundled sample data.
    pub api_base_url: Option<Url>,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            http_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// # Environment Variables
    /// - `SHIPREWARD_API_URL`: optional tracking API base URL
    /// - `SHIPREWARD_HTTP_TIMEOUT_SECS`: optional request timeout (default 15)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = match lookup(API_URL_VAR).filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Some(parse_base_url(raw.trim())?),
            None => None,
        };

        let http_timeout = match lookup(TIMEOUT_VAR).filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: TIMEOUT_VAR,
                        value: raw,
                    })
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_base_url,
            http_timeout,
        })
    }
}

/// Ensures a trailing slash so `Url::join` keeps any path prefix.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|source| ConfigError::InvalidUrl {
        var: API_URL_VAR,
        source,
    })
}
