/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::http::{Result, TemError};
use crate::types::casing;

/// Base URL for the Tron Energy Market API
pub const DEFAULT_BASE_URL: &str = "https://api.tronenergy.market/";

const ENV_BASE_URL: &str = "TEM_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "TEM_TIMEOUT_SECS";
const ENV_CONNECT_TIMEOUT_SECS: &str = "TEM_CONNECT_TIMEOUT_SECS";

/// HTTP client configuration
///
/// Timeouts are unset by default, leaving the transport defaults in place.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Read `TEM_BASE_URL`, `TEM_TIMEOUT_SECS` and `TEM_CONNECT_TIMEOUT_SECS`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url.trim().to_string();
            }
        }
        if let Some(timeout) = secs_from_env(ENV_TIMEOUT_SECS)? {
            config.timeout = Some(timeout);
        }
        if let Some(connect_timeout) = secs_from_env(ENV_CONNECT_TIMEOUT_SECS)? {
            config.connect_timeout = Some(connect_timeout);
        }

        Ok(config)
    }
}

fn secs_from_env(name: &str) -> Result<Option<Duration>> {
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => parse_secs(name, &raw).map(Some),
        _ => Ok(None),
    }
}

fn parse_secs(name: &str, raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| TemError::Config(format!("{name} must be a whole number of seconds, got {raw:?}")))
}

/// Parse a base URL so that relative joins keep any path prefix.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Main HTTP client for the Tron Energy Market API
///
/// Owns one connection pool. Clones share it, and the pool is released
/// when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct TemClient {
    http_client: Client,
    base_url: Url,
}

impl TemClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(&config.base_url)?,
        })
    }

    /// Create a client against another deployment (or a mock server)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig {
            base_url: base_url.into(),
            ..ClientConfig::default()
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint such as `/order/list`
    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build request builder for an endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        debug!(%method, %url, "tem request");
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode the body into `T`
    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = Self::checked(builder.send().await?).await?;
        let body = response.bytes().await?;
        casing::decode(&body)
    }

    /// Send a request whose success carries no payload
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        Self::checked(builder.send().await?).await?;
        Ok(())
    }

    async fn checked(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let message = response.text().await.unwrap_or_default();
        warn!(%url, status = status.as_u16(), body = %message, "tem request failed");
        Err(TemError::api_error(status, message))
    }
}
