//! HTTP client for the FRED observations endpoint.

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode};

use fredline_types::{DateRange, ObservationsPage, Series};

use crate::FetchError;
use crate::url::{BASE_URL, observations_url};

/// Configuration for the FRED client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// Base URL of the FRED API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration with the given API key and defaults for
    /// everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("fredline/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Overrides the base URL (useful for tests and proxies).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client with connection pooling and response classification.
///
/// This is the concrete transport behind the fetch pipeline: it builds the
/// request for a window, performs the call, and classifies the outcome
/// into success, transient failure, or fatal failure. The retry loop and
/// orchestrator never look at protocol details.
#[derive(Debug, Clone)]
pub struct FredClient {
    client: Client,
    config: ClientConfig,
}

impl FredClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            // Keep connections alive for reuse across windows
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches one window of observations for a series.
    ///
    /// # Errors
    ///
    /// Returns a classified [`FetchError`]: transient for network-level
    /// failures, 5xx responses, and rate limiting (with the provider's
    /// `Retry-After` hint when present); fatal for other client errors and
    /// malformed response bodies.
    pub async fn observations(
        &self,
        series: &Series,
        range: DateRange,
    ) -> Result<ObservationsPage, FetchError> {
        let url = observations_url(&self.config.base_url, series, range);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<ObservationsPage>()
                .await
                .map_err(|e| FetchError::fatal(format!("malformed observations body: {e}")));
        }

        Err(classify_status(status, retry_after_hint(response.headers())))
    }
}

/// Classifies a request-level reqwest error.
fn classify_request_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() || error.is_connect() || error.is_request() {
        FetchError::transient(error.to_string())
    } else {
        FetchError::fatal(error.to_string())
    }
}

/// Classifies a non-success HTTP status.
fn classify_status(status: StatusCode, retry_after: Option<Duration>) -> FetchError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        FetchError::rate_limited(format!("HTTP {status}"), retry_after)
    } else if status.is_server_error() {
        FetchError::transient(format!("HTTP {status}"))
    } else {
        FetchError::fatal(format!("HTTP {status}"))
    }
}

/// Parses the seconds form of a `Retry-After` header.
fn retry_after_hint(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
