//! HTTP client: one GET, one decoded body, response headers preserved
//!
//! The client handles:
//! - Base URL joining (server-issued absolute next-page URLs pass through)
//! - Default headers, including the provider API key header
//! - Query parameter encoding
//! - Status checking and response body decoding

use crate::error::{Error, Result};
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Header carrying the Pulsewatch API key.
pub(crate) const API_KEY_HEADER: &str = "X-Api-Key";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all relative request paths
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("pulsewatch-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
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

    /// Set the API key sent with every request
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config
            .default_headers
            .insert(API_KEY_HEADER.to_string(), key.into());
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// A decoded response body together with the response headers.
///
/// The headers are kept so the pagination parser can extract the next-page
/// link after the body has been consumed.
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// Decoded response body
    pub body: T,
    /// Response headers
    pub headers: HeaderMap,
}

/// HTTP client for the Pulsewatch REST API
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Make a GET request and decode the JSON body into `T`.
    ///
    /// `url` may be a path relative to the configured base URL, or an
    /// absolute URL (server-issued next-page links are absolute and are used
    /// verbatim). Query parameters are attached only when non-empty.
    ///
    /// Non-2xx statuses become [`Error::HttpStatus`]; a body that does not
    /// match `T` becomes [`Error::Decode`]. No retries.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<ApiResponse<T>> {
        // A relative path with no base URL configured fails here, before any
        // request goes out.
        let full_url = Url::parse(&self.build_url(url))?;

        let mut req = self.client.get(full_url.clone());
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if !query.is_empty() {
            req = req.query(query);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let headers = response.headers().clone();
        let text = response.text().await?;
        let body: T = serde_json::from_str(&text).map_err(|e| Error::decode(e.to_string()))?;

        debug!("GET {} -> {}", full_url, status.as_u16());
        Ok(ApiResponse { body, headers })
    }

    /// Build full URL from a path, leaving absolute URLs untouched
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
