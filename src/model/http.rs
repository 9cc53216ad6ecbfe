/******************************************************************************
   Author: Daniel J. Umpierrez
   Date: 14/10/26
******************************************************************************/

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{API_KEY_HEADER, USER_AGENT};
use crate::error::{AppError, TIMESTAMP_OUT_OF_SYNC_CODE};
use crate::model::responses::ApiErrorBody;
use crate::model::retry::RetryConfig;
use reqwest::Client as HttpInternalClient;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

/// Query parameters of a request, in wire order
pub type Params<'a> = [(&'a str, String)];

/// HTTP client for the Binance REST API
///
/// Every request goes through the shared rate limiter. Signed requests are
/// re-signed and sent once more after a clock resync when Binance rejects
/// the timestamp.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: HttpInternalClient,
    config: Arc<Config>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl HttpClient {
    /// Creates a new client
    ///
    /// No request is sent, public endpoints work without credentials.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = Arc::new(RwLock::new(RateLimiter::new(&config.rate_limiter)));

        let auth = Arc::new(Auth::new(
            config.clone(),
            http_client.clone(),
            rate_limiter.clone(),
        ));

        Ok(Self {
            auth,
            http_client,
            config,
            rate_limiter,
        })
    }

    /// Makes an unsigned GET request
    pub async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params<'_>,
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, params, false).await
    }

    /// Makes a signed GET request
    pub async fn get_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params<'_>,
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, params, true).await
    }

    /// Makes a signed POST request, parameters travel in the query string
    pub async fn post_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params<'_>,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, params, true).await
    }

    /// Makes a signed DELETE request
    pub async fn delete_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params<'_>,
    ) -> Result<T, AppError> {
        self.request(Method::DELETE, path, params, true).await
    }

    /// Makes a request and decodes the JSON answer
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params<'_>,
        signed: bool,
    ) -> Result<T, AppError> {
        match self.request_internal(method.clone(), path, params, signed).await {
            Ok(response) => self.parse_response(response).await,
            Err(AppError::TimestampOutOfSync) if signed => {
                warn!("Timestamp rejected by server, synchronizing clock and retrying");
                self.auth.sync_time().await?;
                let response = self.request_internal(method, path, params, signed).await?;
                self.parse_response(response).await
            }
            Err(e) => Err(e),
        }
    }

    async fn request_internal(
        &self,
        method: Method,
        path: &str,
        params: &Params<'_>,
        signed: bool,
    ) -> Result<Response, AppError> {
        let query = if signed {
            self.auth.signed_query(params).await?
        } else {
            serde_urlencoded::to_string(params)?
        };

        let base = self.config.rest_api.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let url = if query.is_empty() {
            format!("{base}/{path}")
        } else {
            format!("{base}/{path}?{query}")
        };

        let mut headers = vec![("Accept", "application/json")];
        if signed {
            let credentials = self.auth.credentials()?;
            headers.push((API_KEY_HEADER, credentials.api_key.as_str()));
        }

        make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            method,
            &url,
            headers,
            self.config.retry.clone(),
        )
        .await
    }

    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            error!("Cannot decode response: {} ({})", e, body);
            AppError::Deserialization(e.to_string())
        })
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.rest_api.base_url)
            .field("auth", &self.auth)
            .finish()
    }
}

/// Makes an HTTP request with automatic rate limiting and retry on rate limit errors
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared rate limiter to control request rate
/// * `method` - HTTP method
/// * `url` - Full URL to request, query string included
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `retry_config` - Retry configuration (max retries and fallback delay)
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError::RateLimitExceeded)` - 429 or 418 answered more than `max_retries` times
/// * `Err(AppError::TimestampOutOfSync)` - Binance code -1021
/// * `Err(AppError::Api)` - Any other Binance error body
///
/// # Example
///
/// ```ignore
/// use clinance::model::http::make_http_request;
/// use clinance::model::retry::RetryConfig;
/// use reqwest::{Client, Method};
///
/// let response = make_http_request(
///     &Client::new(),
///     rate_limiter.clone(),
///     Method::GET,
///     "https://api.binance.com/api/v3/time",
///     vec![],
///     RetryConfig::with_max_retries_and_delay(3, 5),
/// ).await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    retry_config: RetryConfig,
) -> Result<Response, AppError> {
    let mut retry_count = 0;
    let max_retries = retry_config.max_retries();

    loop {
        {
            let limiter = rate_limiter.read().await;
            limiter.wait().await;
        }

        debug!("{} {}", method, redact_signature(url));

        let mut request = client.request(method.clone(), url);
        for (name, value) in &headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::IM_A_TEAPOT {
            retry_count += 1;
            if retry_count > max_retries {
                error!(
                    "Rate limit exceeded after {} attempts. Max retries ({}) reached.",
                    retry_count, max_retries
                );
                return Err(AppError::RateLimitExceeded);
            }

            let delay = retry_after(&response).unwrap_or_else(|| retry_config.delay());
            warn!(
                "Rate limited with {} (attempt {}). Waiting {:?} before retry...",
                status, retry_count, delay
            );
            tokio::time::sleep(delay).await;
            continue;
        }

        let body_text = response.text().await.unwrap_or_default();
        return Err(error_from_body(status, &body_text));
    }
}

/// Maps a failed answer to an error
pub fn error_from_body(status: StatusCode, body_text: &str) -> AppError {
    let api_error = serde_json::from_str::<ApiErrorBody>(body_text).ok();

    if let Some(body) = api_error.as_ref().filter(|b| b.code == TIMESTAMP_OUT_OF_SYNC_CODE) {
        warn!("Timestamp outside recvWindow: {}", body.msg);
        return AppError::TimestampOutOfSync;
    }

    match (status, api_error) {
        (StatusCode::UNAUTHORIZED, _) => {
            error!("Unauthorized: {}", body_text);
            AppError::Unauthorized
        }
        (StatusCode::NOT_FOUND, _) => {
            error!("Not found: {}", body_text);
            AppError::NotFound
        }
        (_, Some(body)) => {
            error!("Binance error {}: {}", body.code, body.msg);
            AppError::Api {
                status,
                code: body.code,
                message: body.msg,
            }
        }
        (_, None) => {
            error!("Request failed with status {}: {}", status, body_text);
            AppError::Unexpected(status)
        }
    }
}

fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Hides the signature of a signed URL before it reaches the logs
fn redact_signature(url: &str) -> String {
    match url.find("signature=") {
        Some(pos) => format!("{}signature=***", &url[..pos]),
        None => url.to_string(),
    }
}
