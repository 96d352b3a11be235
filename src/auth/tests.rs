//! Tests for the auth module

use super::*;
use base64::Engine;

#[test]
fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    let client = reqwest::Client::new();
    let req = client.get("https://posterous.com/api/getsites");

    let built = auth.apply(req).unwrap().build().unwrap();
    assert!(built.headers().get("Authorization").is_none());
    assert!(!auth.is_configured());
}

#[test]
fn test_basic_auth() {
    let auth = Authenticator::new(AuthConfig::Basic {
        username: "user@example.com".to_string(),
        password: "pass".to_string(),
    });
    assert!(auth.is_configured());

    let client = reqwest::Client::new();
    let req = client.get("https://posterous.com/api/getsites");
    let built = auth.apply(req).unwrap().build().unwrap();

    let auth_header = built
        .headers()
        .get("Authorization")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(auth_header.starts_with("Basic "));

    let encoded = auth_header.strip_prefix("Basic ").unwrap();
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), "user@example.com:pass");
}

#[test]
fn test_authenticator_from_credentials() {
    let auth = Authenticator::new(AuthConfig::from_credentials(Some(Credentials::new(
        "a", "b",
    ))));
    assert!(matches!(auth.config(), AuthConfig::Basic { username, .. } if username == "a"));
}
