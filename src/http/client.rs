//! HTTP client
//!
//! Sends one request at a time and returns the full response body. Each call
//! is awaited to completion by the caller before the next one is issued.

use crate::auth::Authenticator;
use crate::error::{Error, Result};
use crate::types::{Method, Params};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for relative paths
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
            user_agent: format!("posterous-rs/{}", env!("CARGO_PKG_VERSION")),
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
#[derive(Debug, Default)]
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

/// HTTP client for the Posterous API
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (key, value) in &config.default_headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| Error::config(format!("invalid header name '{key}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::config(format!("invalid value for header '{key}': {e}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Send a request and return the response body as text
    ///
    /// GET requests carry `params` in the query string, POST requests as an
    /// url-encoded form body.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        auth: Option<&Authenticator>,
    ) -> Result<String> {
        let full_url = self.build_url(path);
        debug!("{} {} ({} params)", method, full_url, params.len());

        let mut req = self.client.request(method.into(), &full_url);
        req = match method {
            Method::GET if !params.is_empty() => req.query(params),
            Method::GET => req,
            Method::POST => req.form(params),
        };

        if let Some(auth) = auth {
            req = auth.apply(req)?;
        }

        let response = check_status(req.send().await?).await?;
        let body = response.text().await?;
        debug!("Request succeeded: {} {} ({} bytes)", method, full_url, body.len());
        Ok(body)
    }

    /// Fetch a URL and return the raw bytes
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let full_url = self.build_url(url);
        debug!("Downloading {}", full_url);

        let response = check_status(self.client.get(&full_url).send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Build full URL from path
    pub(crate) fn build_url(&self, path: &str) -> String {
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

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::http_status(status.as_u16(), body))
}
