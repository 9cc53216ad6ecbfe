/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 15/10/26
******************************************************************************/

use crate::constants::{
    DEFAULT_RATE_LIMIT_BURST_SIZE, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_RECV_WINDOW_MS, DEFAULT_REST_BASE_URL,
    DEFAULT_REST_TIMEOUT_SECS, ENV_API_KEY, ENV_API_SECRET,
};
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Serialize, Deserialize, Clone, PartialEq)]
/// API key and secret used for signed endpoints
pub struct Credentials {
    /// API key, sent as `X-MBX-APIKEY`
    pub api_key: String,
    /// API secret, only used locally to sign requests
    #[serde(skip_serializing)]
    pub api_secret: String,
}

impl Credentials {
    /// Creates credentials from a key and a secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Reads `BINANCE_KEY` and `BINANCE_SECRET`.
    ///
    /// Returns `None` unless both are present and non-empty.
    pub fn from_env() -> Option<Self> {
        let api_key: Option<String> = get_env_or_none(ENV_API_KEY);
        let api_secret: Option<String> = get_env_or_none(ENV_API_SECRET);
        match (api_key, api_secret) {
            (Some(key), Some(secret)) => Some(Self::new(key, secret)),
            _ => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible: String = self.api_key.chars().take(4).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{visible}***"))
            .field("api_secret", &"***")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Binance client
pub struct Config {
    /// Credentials, `None` for a public-only client
    pub credentials: Option<Credentials>,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Retry behaviour on rate limit answers
    pub retry: RetryConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Binance REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// Milliseconds a signed request stays valid
    pub recv_window: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment, loading `.env` first
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("No .env file loaded: {e}"),
        }

        let credentials = Credentials::from_env();
        if credentials.is_none() {
            debug!(
                "{} / {} not set, using a public client",
                ENV_API_KEY, ENV_API_SECRET
            );
        }

        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "BINANCE_REST_BASE_URL",
                    String::from(DEFAULT_REST_BASE_URL),
                ),
                timeout: get_env_or_default("BINANCE_REST_TIMEOUT", DEFAULT_REST_TIMEOUT_SECS),
                recv_window: get_env_or_default("BINANCE_RECV_WINDOW", DEFAULT_RECV_WINDOW_MS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "BINANCE_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "BINANCE_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "BINANCE_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
            retry: RetryConfig::from_env(),
        }
    }

    /// Configuration pointing at `base_url` with default limits and no environment lookups
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: None,
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_REST_TIMEOUT_SECS,
                recv_window: DEFAULT_RECV_WINDOW_MS,
            },
            rate_limiter: RateLimiterConfig {
                max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
            },
            retry: RetryConfig::new(),
        }
    }

    /// Replaces the credentials
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// True when signed endpoints can be used
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}
