//! Configuration management following 12-factor app principles
//!
//! Defaults for the issuer front-end are read from environment variables
//! (optionally seeded from a `.env` file). Command-line values take
//! precedence over everything loaded here.

use anyhow::Result;
use chrono::TimeDelta;
use std::env;

use crate::duration::parse_duration;
use crate::error::Error;

pub const ISSUER_VAR: &str = "SVCACCT_ISSUER";
pub const AUDIENCE_VAR: &str = "SVCACCT_AUDIENCE";
pub const EXPIRY_VAR: &str = "SVCACCT_EXPIRY";
pub const SHARED_KEY_VAR: &str = "SVCACCT_SHARED_KEY";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Default token lifetime when neither flag nor environment sets one
pub fn default_expiry() -> TimeDelta {
    TimeDelta::hours(1)
}

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone)]
pub struct Config {
    /// Default issuer (`iss`)
    pub issuer: Option<String>,

    /// Default audience (`aud`), comma-separated in the environment
    pub audience: Vec<String>,

    /// Default time-to-live
    pub expiry: TimeDelta,

    /// Base64 shared key; takes effect only when no key is passed on the command line
    pub shared_key: Option<String>,

    /// Runtime configuration
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset, and blank audience entries are dropped.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let expiry = match lookup(EXPIRY_VAR) {
            Some(raw) => parse_duration(&raw)
                .map_err(|e| Error::Config(format!("{EXPIRY_VAR} is invalid: {e}")))?,
            None => default_expiry(),
        };

        let config = Self {
            issuer: lookup(ISSUER_VAR),
            audience: lookup(AUDIENCE_VAR)
                .map(|raw| {
                    raw.split(',')
                        .filter(|item| !item.trim().is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            expiry,
            shared_key: lookup(SHARED_KEY_VAR),
            log_filter: lookup(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        };

        tracing::debug!(
            issuer = ?config.issuer,
            audience = ?config.audience,
            expiry_secs = config.expiry.num_seconds(),
            shared_key_set = config.shared_key.is_some(),
            "Configuration loaded"
        );

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            issuer: None,
            audience: Vec::new(),
            expiry: default_expiry(),
            shared_key: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiry", &self.expiry)
            .field("shared_key", &self.shared_key.as_ref().map(|_| "<redacted>"))
            .field("log_filter", &self.log_filter)
            .finish()
    }
}
