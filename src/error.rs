//! Error types for the Posterous client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Posterous client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // API Errors
    // ============================================================================
    /// The service answered with an `<err>` element inside the `<rsp>` envelope
    #[error("Posterous API error {status}: {message}")]
    Api { message: String, status: String },

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    /// A field value could not be coerced to its declared type
    #[error("Failed to parse field '{field}' from {value:?}: {reason}")]
    Parse {
        field: String,
        value: String,
        reason: String,
    },

    #[error("XML parsing error: {message}")]
    XmlParse { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Request Errors
    // ============================================================================
    /// A caller-supplied parameter had the wrong type or a required one was missing
    #[error("Invalid parameter '{param}': expected {expected}")]
    Validation { param: String, expected: String },

    #[error("Authentication required: {message}")]
    Authentication { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an API error from the envelope's message and status
    pub fn api(message: impl Into<String>, status: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            status: status.into(),
        }
    }

    /// Create a field coercion error
    pub fn parse(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Parse {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an XML syntax error
    pub fn xml(message: impl Into<String>) -> Self {
        Self::XmlParse {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a parameter validation error
    pub fn validation(param: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::Validation {
            param: param.into(),
            expected: expected.into(),
        }
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if the service itself reported this error
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Status code reported by the service or the HTTP layer, if any
    pub fn status_code(&self) -> Option<String> {
        match self {
            Error::Api { status, .. } => Some(status.clone()),
            Error::HttpStatus { status, .. } => Some(status.to_string()),
            _ => None,
        }
    }
}

/// Result type alias for the Posterous client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
