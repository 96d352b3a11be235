//! Client configuration
//!
//! Where the API lives and how to talk to it. Can be built in code or loaded
//! from a YAML file, e.g.
//!
//! ```yaml
//! host: "https://posterous.com"
//! api_root: "/api"
//! format: xml
//! timeout_seconds: 30
//! ```

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::types::ResponseFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Client Config
// ============================================================================

/// Posterous API client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and host of the service
    #[serde(default = "default_host")]
    pub host: String,

    /// Path prefix of every endpoint
    #[serde(default = "default_api_root")]
    pub api_root: String,

    /// Response format to request and decode
    #[serde(default)]
    pub format: ResponseFormat,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            api_root: default_api_root(),
            format: ResponseFormat::default(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_host() -> String {
    "https://posterous.com".to_string()
}

fn default_api_root() -> String {
    "/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("posterous-rs/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load a config from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_yaml(&content)
    }

    /// Load a config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ClientConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the host and API root form a usable URL
    pub fn validate(&self) -> Result<()> {
        if self.timeout_seconds == 0 {
            return Err(Error::config("timeout_seconds must be greater than zero"));
        }
        let url = url::Url::parse(&self.api_url())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "unsupported scheme '{}' in host {}",
                url.scheme(),
                self.host
            )));
        }
        Ok(())
    }

    /// Base URL all endpoint paths are resolved against
    pub fn api_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        let root = self.api_root.trim_matches('/');
        if root.is_empty() {
            host.to_string()
        } else {
            format!("{host}/{root}")
        }
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Transport settings derived from this config
    pub fn to_http_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .base_url(self.api_url())
            .timeout(self.timeout())
            .user_agent(self.user_agent.clone())
            .build()
    }
}

/// Builder for client config
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the host, e.g. `https://posterous.com`
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the API root path
    pub fn api_root(mut self, root: impl Into<String>) -> Self {
        self.config.api_root = root.into();
        self
    }

    /// Set the response format
    pub fn format(mut self, format: ResponseFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.config.timeout_seconds = seconds;
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.host, "https://posterous.com");
        assert_eq!(config.api_url(), "https://posterous.com/api");
        assert_eq!(config.format, ResponseFormat::Xml);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
host: "http://localhost:8080/"
format: json
"#;
        let config = ClientConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.api_url(), "http://localhost:8080/api");
        assert_eq!(config.format, ResponseFormat::Json);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_empty_api_root() {
        let config = ClientConfig::builder()
            .host("http://127.0.0.1:9000")
            .api_root("/")
            .build();
        assert_eq!(config.api_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ClientConfig::from_yaml("format: [xml").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));

        let err = ClientConfig::from_yaml("format: csv").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_host() {
        let err = ClientConfig::builder().host("posterous").build().validate().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = ClientConfig::builder()
            .host("ftp://posterous.com")
            .build()
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = ClientConfig::builder().timeout_seconds(0).build().validate().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_root: /api/v2\ntimeout_seconds: 5").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_url(), "https://posterous.com/api/v2");

        let http = config.to_http_config();
        assert_eq!(http.base_url.as_deref(), Some("https://posterous.com/api/v2"));
        assert_eq!(http.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_file() {
        let err = ClientConfig::from_file("/nonexistent/posterous.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
