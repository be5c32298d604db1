//! BGPView HTTP client

use super::types::{BgpViewResponse, PrefixRecord};
use crate::config::{LookupConfig, DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_MS};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::net::IpAddr;
use std::time::Duration;

/// Error type for prefix lookups
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The request could not be sent or the body could not be read
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// Request timeout
    #[error("HTTP request timed out")]
    Timeout,

    /// The service answered with something other than 200
    #[error("HTTP request failed with status code: {0}")]
    Status(u16),

    /// The body did not match the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Looks up the prefixes and origin ASNs covering an IP
#[async_trait]
pub trait PrefixLookupService: Send + Sync {
    /// Return the prefix records for `ip` in service order
    async fn lookup(&self, ip: IpAddr) -> Result<Vec<PrefixRecord>, LookupError>;
}

/// Client for `GET <base>/ip/<ip>`
///
/// # Examples
///
/// ```no_run
/// use bgpview::bgp::{BgpViewClient, PrefixLookupService};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BgpViewClient::new()?;
///     for record in client.lookup("8.8.8.8".parse()?).await? {
///         println!("{} AS{}", record.prefix, record.asn);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BgpViewClient {
    client: reqwest::Client,
    base_url: String,
}

impl BgpViewClient {
    /// Client for the public BGPView API
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(
            DEFAULT_API_BASE_URL,
            Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
        )
    }

    /// Client for an API at `base_url` (scheme and authority, no trailing slash)
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bgpview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LookupError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client built from the run configuration
    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        Self::with_base_url(&config.api_base_url, config.http_timeout)
    }

    /// URL queried for `ip`
    pub fn endpoint(&self, ip: IpAddr) -> String {
        format!("{}/ip/{}", self.base_url, ip)
    }
}

/// Decode a `GET /ip/<ip>` body into prefix records
pub fn decode_response(body: &[u8]) -> Result<Vec<PrefixRecord>, LookupError> {
    serde_json::from_slice::<BgpViewResponse>(body)
        .map(BgpViewResponse::into_records)
        .map_err(|e| LookupError::Decode(e.to_string()))
}

#[async_trait]
impl PrefixLookupService for BgpViewClient {
    async fn lookup(&self, ip: IpAddr) -> Result<Vec<PrefixRecord>, LookupError> {
        let url = self.endpoint(ip);
        tracing::debug!(%url, "querying prefix data");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(%url, status = status.as_u16(), "unexpected status");
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;

        let records = decode_response(&body)?;
        tracing::debug!(%ip, count = records.len(), "prefix lookup complete");
        Ok(records)
    }
}
