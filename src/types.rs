//! Common types used throughout the Posterous client
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
///
/// This is also the generic decoded node produced by the response decoders.
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Ordered request parameters; keys may repeat (`tags[]`)
pub type Params = Vec<(String, String)>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method used by an API endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::GET => f.write_str("GET"),
            Method::POST => f.write_str("POST"),
        }
    }
}

// ============================================================================
// Response Format
// ============================================================================

/// Wire format of API responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// XML wrapped in an `<rsp>` envelope (default)
    #[default]
    Xml,
    /// JSON mirroring the XML field names, errors via HTTP status
    Json,
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(Method::GET), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(Method::POST), reqwest::Method::POST);
        assert_eq!(Method::POST.to_string(), "POST");
    }

    #[test]
    fn test_response_format_serde() {
        let format: ResponseFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, ResponseFormat::Json);
        assert_eq!(ResponseFormat::default(), ResponseFormat::Xml);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
    }
}
