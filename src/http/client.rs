//! HTTP client for the items endpoint
//!
//! Provides a thin client that handles:
//! - Resolving relative endpoint paths against an optional base URL
//! - Sending one GET with the page query attached
//! - Decoding the JSON body into typed responses

use crate::error::{Error, Result};
use crate::pagination::PageSource;
use crate::types::{ApiResponse, FetchRequest, PageRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Configuration for the items client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL that relative endpoint paths are resolved against
    pub base_url: Option<String>,
    /// Transport timeout for a whole request
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("item-fetcher/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Client for paginated item endpoints.
///
/// Wraps one `reqwest::Client` (a connection pool); cloning is cheap and
/// clones share the pool. Construct one per application and pass it to
/// every fetch.
#[derive(Debug, Clone)]
pub struct ItemsClient {
    client: Client,
    base_url: Option<Url>,
}

impl ItemsClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Self::from_client(client, config.base_url.as_deref())
    }

    /// Wrap a caller-built reqwest client
    pub fn from_client(client: Client, base_url: Option<&str>) -> Result<Self> {
        let base_url = base_url.map(Url::parse).transpose()?;
        Ok(Self { client, base_url })
    }

    /// Base URL used for relative paths, if any
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Fetch one page of items.
    ///
    /// See [`fetch_items`].
    pub async fn fetch_items(&self, request: &FetchRequest) -> Result<ApiResponse> {
        fetch_items(self, request).await
    }

    /// Make a GET request with query parameters and parse the JSON response.
    ///
    /// Non-2xx statuses and undecodable bodies are returned as
    /// [`Error::Fetch`]. Nothing is logged here.
    pub async fn get_json<T, Q>(&self, url: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.resolve_url(url)?;

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    /// Resolve an endpoint to an absolute URL.
    ///
    /// Absolute URLs are used as-is. Relative ones are joined onto the base
    /// URL the way a browser resolves them against the page origin.
    pub fn resolve_url(&self, url: &str) -> Result<Url> {
        match Url::parse(url) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => Ok(base.join(url)?),
                None => Err(Error::InvalidUrl(url::ParseError::RelativeUrlWithoutBase)),
            },
            Err(e) => Err(e.into()),
        }
    }
}

/// Fetch one page of items from `request.api_url`.
///
/// Sends exactly one `GET {api_url}?cursor={cursor}&limit={limit}` and
/// decodes the body as [`ApiResponse`]. On failure one error event is logged
/// and the error is returned unchanged.
pub async fn fetch_items(client: &ItemsClient, request: &FetchRequest) -> Result<ApiResponse> {
    let page: &PageRequest = &request.page;

    match client.get_json::<ApiResponse, _>(&request.api_url, page).await {
        Ok(response) => {
            debug!(
                "Fetched {} items from {} (cursor={}, limit={})",
                response.len(),
                request.api_url,
                page.cursor,
                page.limit
            );
            Ok(response)
        }
        Err(e) => {
            error!("Error fetching items from {}: {}", request.api_url, e);
            Err(e)
        }
    }
}

#[async_trait]
impl PageSource for ItemsClient {
    async fn fetch_page(&self, request: &FetchRequest) -> Result<ApiResponse> {
        fetch_items(self, request).await
    }
}
