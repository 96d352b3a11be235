//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: API call → XML/JSON decoding → typed
//! entities → backup tree on disk

use posterous::api::endpoints::READ_POSTS;
use posterous::coerce::parse_date;
use posterous::decode::{JsonDecoder, ResponseDecoder, XmlDecoder};
use posterous::{
    Args, Backup, BackupConfig, ClientConfig, Credentials, Error, Media, PosterousApi,
    ResponseFormat,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{basic_auth, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SITES_XML: &str = include_str!("fixtures/sites.xml");
const POSTS_XML: &str = include_str!("fixtures/posts.xml");
const ERROR_XML: &str = include_str!("fixtures/error.xml");

fn client(server: &MockServer, format: ResponseFormat) -> PosterousApi {
    let config = ClientConfig::builder()
        .host(server.uri())
        .format(format)
        .build();
    PosterousApi::new(config, Some(Credentials::new("sachin@example.com", "brunch"))).unwrap()
}

// ============================================================================
// API Integration Tests
// ============================================================================

#[tokio::test]
async fn test_sites_then_posts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/getsites"))
        .and(basic_auth("sachin@example.com", "brunch"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SITES_XML))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/readposts"))
        .and(query_param("site_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(POSTS_XML))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, ResponseFormat::Xml);
    let sites = api.get_sites().await.unwrap();
    assert_eq!(sites.len(), 2);

    let posts = api
        .get_posts(sites[0].id.unwrap(), 1, 50)
        .await
        .unwrap();
    let post = &posts[0];
    assert_eq!(post.id, Some(55));
    assert_eq!(post.comments.len(), 1);
    assert_eq!(post.media.len(), 3);

    let kinds: Vec<_> = post.media.iter().map(Media::kind).collect();
    assert_eq!(kinds, vec!["image", "audio", "video"]);

    let Media::Image(image) = &post.media[0] else {
        panic!("expected an image first");
    };
    assert_eq!(image.medium_width, Some(500));
    assert_eq!(image.thumb_width, Some(36));
}

#[tokio::test]
async fn test_error_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ERROR_XML))
        .mount(&server)
        .await;

    let api = client(&server, ResponseFormat::Xml);
    let err = api.get_sites().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Posterous API error 3001: Invalid Posterous email or password"
    );

    let err = api
        .read_posts(Args::new().set("hostname", "sachin"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { .. }));
}

#[tokio::test]
async fn test_validation_happens_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(POSTS_XML))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server, ResponseFormat::Xml);
    let err = api
        .execute(&READ_POSTS, Args::new().set("page", "two"))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid parameter 'page': expected integer"
    );
}

#[tokio::test]
async fn test_json_posts_match_xml_posts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/readposts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 55,
            "title": "Brunch in San Francisco",
            "link": "http://sachin.posterous.com/brunch-in-san-francisco",
            "date": "2009/05/03 19:58:58 -0800",
            "views": 0,
            "private": false,
            "commentsenabled": true,
            "comment": {
                "body": "This is a comment",
                "date": "Thu, 04 Jun 2009 01:33:43 -0800",
                "author": "sachin"
            },
            "media": {
                "type": "image",
                "medium": {"url": "http://x/IMG_0477.scaled500.jpg", "width": 500},
                "thumb": {"url": "http://x/IMG_0477.thumb.jpg", "width": 36}
            }
        }])))
        .mount(&server)
        .await;

    let api = client(&server, ResponseFormat::Json);
    let posts = api.read_posts(Args::new().set("site_id", 1)).await.unwrap();
    assert_eq!(posts.len(), 1);

    let post = &posts[0];
    assert_eq!(
        post.date,
        Some(parse_date("Sun, 03 May 2009 19:58:58 -0800").unwrap())
    );
    assert_eq!(post.comments[0].author, "sachin");
    assert!(matches!(&post.media[0], Media::Image(img) if img.medium_width == Some(500)));
}

// ============================================================================
// Decoder Integration Tests
// ============================================================================

#[test]
fn test_decoders_agree_on_tree_shape() {
    let xml = r"<rsp><post><id>1</id><comment><body>a</body></comment>
                <media><type>audio</type><url>u.mp3</url></media></post></rsp>";
    let json = r#"{"post": {"id": "1", "comments": {"body": "a"},
                  "media": [{"type": "audio", "url": "u.mp3"}]}}"#;

    let from_xml = XmlDecoder::new().decode_records(xml, "post").unwrap();
    let from_json = JsonDecoder::new().decode_records(json, "post").unwrap();
    assert_eq!(from_xml, from_json);
    assert_eq!(from_xml[0]["comments"], json!([{"body": "a"}]));
}

// ============================================================================
// Backup Integration Tests
// ============================================================================

#[tokio::test]
async fn test_full_backup_flow() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/getsites"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SITES_XML))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/readposts"))
        .and(query_param("site_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(POSTS_XML))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/readposts"))
        .and(query_param("site_id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"<rsp stat="ok"/>"#))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/getfile/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server, ResponseFormat::Xml);
    let config = BackupConfig {
        folder: dir.path().to_path_buf(),
        download_media: false,
        ..BackupConfig::default()
    };
    let stats = Backup::new(&api, config).unwrap().run().await.unwrap();
    assert_eq!(stats.sites, 2);
    assert_eq!(stats.posts, 4);

    let private_site = dir.path().join("private");
    assert!(private_site.join("site-private.json").is_file());
    assert!(dir
        .path()
        .join("sachin")
        .join("brunch-in-san-francisco.json")
        .is_file());
}
