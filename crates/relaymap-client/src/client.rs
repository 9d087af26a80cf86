//! Relay inventory HTTP client.

use crate::fetcher::{FetchResponse, Fetcher};
use crate::Cancellation;
use async_trait::async_trait;
use relaymap_core::{Error, Result};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Mullvad's public OpenVPN relay inventory
pub const DEFAULT_RELAYS_URL: &str = "https://api.mullvad.net/www/relays/openvpn/";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for relay inventories
#[derive(Clone)]
pub struct RelayClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    relays_url: String,
    timeout: Duration,
}

impl RelayClient {
    /// Create a client for the default inventory URL
    pub fn new() -> Result<Self> {
        RelayClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> RelayClientBuilder {
        RelayClientBuilder::new()
    }

    /// The inventory URL this client was configured with
    #[must_use]
    pub fn relays_url(&self) -> &str {
        &self.inner.relays_url
    }

    /// Fetch the configured inventory, failing on any non-success status
    pub async fn relays(&self, cancel: Cancellation) -> Result<Vec<u8>> {
        let url = self.relays_url();
        self.get(url, cancel).await?.into_success(url)
    }

    /// Perform a GET request, abandoning it when `cancel` resolves
    pub async fn get(&self, url: &str, cancel: Cancellation) -> Result<FetchResponse> {
        url::Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
        debug!(url = %url, "GET request");

        tokio::select! {
            biased;
            () = cancel => {
                warn!(url = %url, "fetch cancelled");
                Err(Error::Cancelled)
            }
            response = self.send(url) => response,
        }
    }

    async fn send(&self, url: &str) -> Result<FetchResponse> {
        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_error(&e))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.map_error(&e))?;
        debug!(url = %url, status, bytes = body.len(), "response received");

        Ok(FetchResponse {
            status,
            body: body.to_vec(),
        })
    }

    fn map_error(&self, err: &reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.inner.timeout.as_secs())
        } else if err.is_connect() {
            Error::Connection(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

#[async_trait]
impl Fetcher for RelayClient {
    async fn fetch(&self, url: &str, cancel: Cancellation) -> Result<FetchResponse> {
        self.get(url, cancel).await
    }
}

/// Builder for configuring a [`RelayClient`]
pub struct RelayClientBuilder {
    relays_url: String,
    timeout: Duration,
    user_agent: String,
}

impl RelayClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            relays_url: DEFAULT_RELAYS_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("relaymap/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the inventory URL (useful for testing)
    #[must_use]
    pub fn relays_url(mut self, url: impl Into<String>) -> Self {
        self.relays_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<RelayClient> {
        url::Url::parse(&self.relays_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {e}", self.relays_url)))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(RelayClient {
            inner: Arc::new(ClientInner {
                http,
                relays_url: self.relays_url,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for RelayClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
