/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 14/10/26
******************************************************************************/

//! Error type shared by every layer of the client.

use reqwest::StatusCode;
use std::fmt;

/// Binance error code answered when the request timestamp falls outside `recvWindow`
pub const TIMESTAMP_OUT_OF_SYNC_CODE: i64 = -1021;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure reported by `reqwest`
    Network(reqwest::Error),
    /// Standard I/O failure
    Io(std::io::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// CSV writer failure
    Csv(csv::Error),
    /// Non-success HTTP status without a parseable Binance error body
    Unexpected(StatusCode),
    /// HTTP 401, usually a wrong API key
    Unauthorized,
    /// HTTP 404
    NotFound,
    /// Request weight exhausted and retries ran out
    RateLimitExceeded,
    /// Local clock drifted outside the receive window (Binance code -1021)
    TimestampOutOfSync,
    /// A signed endpoint was called without key and secret
    MissingCredentials,
    /// Error body returned by Binance
    Api {
        /// HTTP status of the response
        status: StatusCode,
        /// Binance error code, e.g. -1121
        code: i64,
        /// Binance error message
        message: String,
    },
    /// Payload could not be converted into a model
    Deserialization(String),
    /// User supplied value is not usable
    InvalidInput(String),
    /// Request signing failed
    Signing(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Csv(e) => write!(f, "csv error: {e}"),
            AppError::Unexpected(s) => write!(f, "unexpected http status: {s}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::TimestampOutOfSync => write!(f, "timestamp out of sync with server"),
            AppError::MissingCredentials => write!(
                f,
                "missing credentials: set BINANCE_KEY and BINANCE_SECRET"
            ),
            AppError::Api {
                status,
                code,
                message,
            } => write!(f, "binance error {code} ({status}): {message}"),
            AppError::Deserialization(s) => write!(f, "deserialization error: {s}"),
            AppError::InvalidInput(s) => write!(f, "invalid input: {s}"),
            AppError::Signing(s) => write!(f, "signing error: {s}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Csv(e)
    }
}

impl From<serde_urlencoded::ser::Error> for AppError {
    fn from(e: serde_urlencoded::ser::Error) -> Self {
        AppError::InvalidInput(format!("cannot encode query: {e}"))
    }
}

/// Convenience alias used across the crate
pub type AppResult<T> = Result<T, AppError>;
