/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 14/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_SECS};
use crate::utils::config::get_env_or_none;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for HTTP request retry behavior on 429 / 418 answers
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retries (None = default of 3, Some(0) = never retry)
    pub max_retry_count: Option<u32>,
    /// Delay in seconds between retries when the server sends no `Retry-After`
    pub retry_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Creates a retry configuration with the default count and delay
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_retry_count: None,
            retry_delay_secs: None,
        }
    }

    /// Reads `MAX_RETRY_COUNT` and `RETRY_DELAY_SECS`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_retry_count: get_env_or_none("MAX_RETRY_COUNT"),
            retry_delay_secs: get_env_or_none("RETRY_DELAY_SECS"),
        }
    }

    /// Never retries
    #[must_use]
    pub fn disabled() -> Self {
        Self::with_max_retries(0)
    }

    /// Creates a new retry configuration with a maximum number of retries
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: None,
        }
    }

    /// Creates a new retry configuration with both max retries and custom delay
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Gets the maximum retry count
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(DEFAULT_MAX_RETRIES)
    }

    /// Gets the fallback retry delay
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs.unwrap_or(DEFAULT_RETRY_DELAY_SECS))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}
