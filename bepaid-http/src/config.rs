//! Gateway credentials and connection settings.
//!
//! # Environment Variables
//!
//! - `BEPAID_API_HOST` - Gateway base URL (default: `https://gateway.bepaid.by/transactions/`)
//! - `BEPAID_SHOP_ID` - Shop id, required
//! - `BEPAID_SECRET_KEY` - Shop secret key, required
//! - `BEPAID_TIMEOUT_SECS` - Per-request timeout in seconds, optional
//!
//! A `.env` file in the working directory is loaded first if present.

use std::fmt;
use std::time::Duration;

use crate::constants::{
    DEFAULT_BASE_URL, ENV_API_HOST, ENV_SECRET_KEY, ENV_SHOP_ID, ENV_TIMEOUT_SECS,
};

/// Errors from reading [`ApiConfig`] out of the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    /// The timeout is not a whole number of seconds.
    #[error("invalid {var}: {value:?} is not a number of seconds")]
    InvalidTimeout {
        /// The variable that was read.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Settings needed to build an [`HttpApi`](crate::api::HttpApi).
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Gateway base URL.
    pub base_url: String,
    /// Shop id.
    pub shop_id: String,
    /// Shop secret key.
    pub secret_key: String,
    /// Optional per-request timeout.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Creates a config for the production gateway.
    pub fn new(shop_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            shop_id: shop_id.into(),
            secret_key: secret_key.into(),
            timeout: None,
        }
    }

    /// Sets the gateway base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or the
    /// timeout does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine.
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or the
    /// timeout does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let shop_id = get(ENV_SHOP_ID).ok_or(ConfigError::MissingVar(ENV_SHOP_ID))?;
        let secret_key = get(ENV_SECRET_KEY).ok_or(ConfigError::MissingVar(ENV_SECRET_KEY))?;
        let mut config = Self::new(shop_id, secret_key);

        if let Some(base_url) = get(ENV_API_HOST) {
            config.base_url = base_url;
        }
        if let Some(value) = get(ENV_TIMEOUT_SECS) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: ENV_TIMEOUT_SECS,
                    value,
                })?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("shop_id", &self.shop_id)
            .field("secret_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}
