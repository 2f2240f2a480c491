//! HTTP client for the contract statistics endpoint.

use std::time::Duration;

use formosa_types::{DateRange, StatsTable};
use reqwest::Client;

use crate::error::FetchError;
use crate::form::{self, contract_stats_form};
use crate::parse::parse_body;

/// Configuration for the query client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout, covering the full request/response cycle.
    pub timeout: Duration,
    /// Connection timeout (separate from the request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("formosa/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HTTP client for fetching futures contract statistics.
///
/// Wraps a pooled [`reqwest::Client`] and holds no mutable state, so a single
/// instance may be shared across concurrent tasks. Every call performs exactly
/// one request; there are no retries and no internal timeouts beyond the
/// transport configuration.
#[derive(Debug, Clone)]
pub struct QueryClient {
    client: Client,
    config: ClientConfig,
}

impl QueryClient {
    /// Creates a new query client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches Mini-TAIEX futures contract statistics for the given range.
    ///
    /// Submits the date-range form query and classifies the response body as
    /// CSV rows or an upstream alert. The call either succeeds with the
    /// complete table or fails with exactly one [`FetchError`] variant.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] on transport failure.
    /// - [`FetchError::Status`] if the exchange answers with a non-200
    ///   status; the exact status is preserved and the body is not read.
    /// - [`FetchError::NoData`] if the range holds no data.
    /// - [`FetchError::Alert`] for any other upstream alert message.
    /// - [`FetchError::Parse`] if the body is neither CSV nor an alert.
    pub async fn fetch_contract_stats(&self, range: DateRange) -> Result<StatsTable, FetchError> {
        self.fetch_from(form::ENDPOINT_URL, range).await
    }

    async fn fetch_from(&self, url: &str, range: DateRange) -> Result<StatsTable, FetchError> {
        let response = self
            .client
            .post(url)
            .form(&contract_stats_form(range))
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        parse_body(&body)
    }
}
