/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 14/10/26
******************************************************************************/

//! Request signing for the Binance REST API
//!
//! Signed endpoints (account, orders, trades) carry a `timestamp` and a
//! `recvWindow` parameter, followed by the hex HMAC-SHA256 of the whole
//! query string keyed with the API secret. The API key travels in the
//! `X-MBX-APIKEY` header.
//!
//! The local clock may drift from the server clock. [`Auth::sync_time`]
//! measures the offset from `GET /api/v3/time` and every later timestamp is
//! corrected with it.

use crate::application::config::{Config, Credentials};
use crate::application::rate_limiter::RateLimiter;
use crate::error::AppError;
use crate::model::http::make_http_request;
use crate::model::responses::ServerTime;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::{Client, Method};
use sha2::Sha256;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

type HmacSha256 = Hmac<Sha256>;

/// Path of the server time endpoint
pub const SERVER_TIME_PATH: &str = "/api/v3/time";

/// Signs queries and keeps the local clock aligned with the server
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    time_offset_ms: RwLock<i64>,
}

impl Auth {
    /// Creates a new Auth instance sharing the HTTP client and rate limiter
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `client` - HTTP client used for the server time request
    /// * `rate_limiter` - Limiter shared with every other request
    pub fn new(config: Arc<Config>, client: Client, rate_limiter: Arc<RwLock<RateLimiter>>) -> Self {
        Self {
            config,
            client,
            rate_limiter,
            time_offset_ms: RwLock::new(0),
        }
    }

    /// Credentials for signed endpoints
    ///
    /// # Returns
    /// * `Err(AppError::MissingCredentials)` - If the client was built without key and secret
    pub fn credentials(&self) -> Result<&Credentials, AppError> {
        self.config
            .credentials
            .as_ref()
            .ok_or(AppError::MissingCredentials)
    }

    /// Hex encoded HMAC-SHA256 of `payload` keyed with `secret`
    pub fn sign(secret: &str, payload: &str) -> Result<String, AppError> {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| AppError::Signing(e.to_string()))?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Milliseconds since the epoch, corrected with the last measured offset
    pub async fn timestamp(&self) -> i64 {
        Utc::now().timestamp_millis() + *self.time_offset_ms.read().await
    }

    /// Offset currently applied to local timestamps
    pub async fn time_offset(&self) -> i64 {
        *self.time_offset_ms.read().await
    }

    /// Builds the signed query string for `params`
    ///
    /// `recvWindow` and `timestamp` are appended before signing and
    /// `signature` is always the last parameter.
    pub async fn signed_query<P: serde::Serialize + ?Sized>(
        &self,
        params: &P,
    ) -> Result<String, AppError> {
        let credentials = self.credentials()?;
        let mut query = serde_urlencoded::to_string(params)?;
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(&format!(
            "recvWindow={}&timestamp={}",
            self.config.rest_api.recv_window,
            self.timestamp().await
        ));
        let signature = Self::sign(&credentials.api_secret, &query)?;
        Ok(format!("{query}&signature={signature}"))
    }

    /// Measures the offset between the server clock and the local clock
    ///
    /// The local time is taken halfway through the round trip.
    pub async fn sync_time(&self) -> Result<i64, AppError> {
        let url = format!(
            "{}{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            SERVER_TIME_PATH
        );
        debug!("Synchronizing clock with {}", url);

        let before = Utc::now().timestamp_millis();
        let response = make_http_request(
            &self.client,
            self.rate_limiter.clone(),
            Method::GET,
            &url,
            vec![],
            self.config.retry.clone(),
        )
        .await?;
        let server: ServerTime = response.json().await?;
        let after = Utc::now().timestamp_millis();

        let offset = server.server_time - (before + after) / 2;
        *self.time_offset_ms.write().await = offset;
        info!("Clock offset to server: {} ms", offset);
        Ok(offset)
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("credentials", &self.config.credentials)
            .finish()
    }
}
