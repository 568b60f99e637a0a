//! Upstream HTTP client.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::{ScheduleRecord, Station};

use super::error::UpstreamError;

/// Default URL serving both stations and schedules.
pub const DEFAULT_UPSTREAM_URL: &str = "https://jakartamrt.co.id/id/val/stasiuns";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// How much of a bad body to keep for diagnostics.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the upstream client.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// URL returning the station list
    pub stations_url: String,
    /// URL returning the schedule records
    pub schedules_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// Create a config pointing at the public MRT site.
    pub fn new() -> Self {
        Self {
            stations_url: DEFAULT_UPSTREAM_URL.to_string(),
            schedules_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Point both fetch operations at one URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.stations_url = url.clone();
        self.schedules_url = url;
        self
    }

    /// Set the station list URL.
    pub fn with_stations_url(mut self, url: impl Into<String>) -> Self {
        self.stations_url = url.into();
        self
    }

    /// Set the schedule URL.
    pub fn with_schedules_url(mut self, url: impl Into<String>) -> Self {
        self.schedules_url = url.into();
        self
    }

    /// Set request timeout. Zero is rejected by [`UpstreamClient::new`].
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the upstream station feed.
///
/// Holds one `reqwest::Client` configured at construction; clones share
/// its connection pool. Every call is a single attempt with no retries.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    stations_url: String,
    schedules_url: String,
}

impl UpstreamClient {
    /// Create a new upstream client.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        if config.timeout_secs == 0 {
            return Err(UpstreamError::Config("timeout must be at least one second"));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            stations_url: config.stations_url,
            schedules_url: config.schedules_url,
        })
    }

    /// GET `url` and return the raw body.
    ///
    /// Any non-2xx status is an error; the body is not inspected.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, UpstreamError> {
        debug!(url, "fetching upstream");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(url, status = status.as_u16(), "upstream returned error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: body.chars().take(BODY_EXCERPT_CHARS).collect(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Fetch the station list.
    pub async fn fetch_stations(&self) -> Result<Vec<Station>, UpstreamError> {
        let body = self.fetch(&self.stations_url).await?;
        decode(&body)
    }

    /// Fetch schedule records for every station.
    pub async fn fetch_schedules(&self) -> Result<Vec<ScheduleRecord>, UpstreamError> {
        let body = self.fetch(&self.schedules_url).await?;
        decode(&body)
    }
}

/// Decode a JSON body, keeping an excerpt on failure.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, UpstreamError> {
    serde_json::from_slice(body).map_err(|e| UpstreamError::Decode {
        message: e.to_string(),
        body: Some(
            String::from_utf8_lossy(body)
                .chars()
                .take(BODY_EXCERPT_CHARS)
                .collect(),
        ),
    })
}
