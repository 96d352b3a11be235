//! Auth configuration types

use serde::{Deserialize, Serialize};

/// Account credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email or username
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Create credentials from a username and password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },
}

impl AuthConfig {
    /// Basic auth when credentials are given, anonymous otherwise
    pub fn from_credentials(credentials: Option<Credentials>) -> Self {
        match credentials {
            Some(Credentials { username, password }) => AuthConfig::Basic { username, password },
            None => AuthConfig::None,
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert!(matches!(config, AuthConfig::None));
    }

    #[test]
    fn test_from_credentials() {
        let config = AuthConfig::from_credentials(Some(Credentials::new("me@example.com", "pw")));
        assert_eq!(
            config,
            AuthConfig::Basic {
                username: "me@example.com".to_string(),
                password: "pw".to_string(),
            }
        );
        assert_eq!(AuthConfig::from_credentials(None), AuthConfig::None);
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("me", "hunter2"));
        assert!(rendered.contains("me"));
        assert!(!rendered.contains("hunter2"));
    }
}
