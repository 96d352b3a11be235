//! Tests for the HTTP client module

use super::*;
use crate::auth::{AuthConfig, Authenticator};
use crate::error::Error;
use crate::types::{Method, Params};
use std::time::Duration;
use wiremock::matchers::{body_string, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::with_config(HttpClientConfig::builder().base_url(server.uri()).build()).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.user_agent.starts_with("posterous-rs/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://posterous.com/api")
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://posterous.com/api".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_invalid_default_header_is_config_error() {
    let config = HttpClientConfig::builder().header("bad header", "x").build();
    let err = HttpClient::with_config(config).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_build_url() {
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url("https://posterous.com/api/")
            .build(),
    )
    .unwrap();

    assert_eq!(client.build_url("/getsites"), "https://posterous.com/api/getsites");
    assert_eq!(client.build_url("readposts"), "https://posterous.com/api/readposts");
    assert_eq!(
        client.build_url("http://files.example.com/a.jpg"),
        "http://files.example.com/a.jpg"
    );
}

#[tokio::test]
async fn test_get_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/readposts"))
        .and(query_param("site_id", "1"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<rsp/>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client
        .send(
            Method::GET,
            "readposts",
            &params(&[("site_id", "1"), ("page", "2")]),
            None,
        )
        .await
        .unwrap();
    assert_eq!(body, "<rsp/>");
}

#[tokio::test]
async fn test_post_sends_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/newpost"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("title=Hello+there&tags%5B%5D=a&tags%5B%5D=b"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client
        .send(
            Method::POST,
            "/newpost",
            &params(&[("title", "Hello there"), ("tags[]", "a"), ("tags[]", "b")]),
            None,
        )
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_auth_applied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getsites"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_string("secret"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/getsites"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let auth = Authenticator::new(AuthConfig::Basic {
        username: "u".to_string(),
        password: "p".to_string(),
    });
    let body = client
        .send(Method::GET, "getsites", &Params::new(), Some(&auth))
        .await
        .unwrap();
    assert_eq!(body, "secret");
}

#[tokio::test]
async fn test_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getsites"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .send(Method::GET, "getsites", &Params::new(), None)
        .await
        .unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "forbidden");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_download_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/a.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF]))
        .mount(&server)
        .await;

    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    let bytes = client
        .download(&format!("{}/files/a.jpg", server.uri()))
        .await
        .unwrap();
    assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
}

#[tokio::test]
async fn test_download_missing_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.download("/gone.mp3").await.unwrap_err();
    assert_eq!(err.status_code(), Some("404".to_string()));
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}
