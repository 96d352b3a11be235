//! Posterous API client

use super::endpoints::{GET_SITES, GET_TAGS, NEW_COMMENT, NEW_POST, READ_POSTS};
use super::method::{ApiMethod, Args};
use crate::auth::{AuthConfig, Authenticator, Credentials};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::models::{Comment, Post, Site, Tag};
use crate::parser::{ModelParser, Payload};
use crate::types::ResponseFormat;
use chrono::NaiveDateTime;
use tracing::{debug, info};

/// Client for the Posterous API
///
/// Calls are independent and each is fully read, decoded and built before
/// it returns.
#[derive(Debug)]
pub struct PosterousApi {
    config: ClientConfig,
    http: HttpClient,
    auth: Authenticator,
    parser: ModelParser,
}

impl PosterousApi {
    /// Create a client; `credentials` may be omitted for public reads
    pub fn new(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(config.to_http_config())?;
        let parser = ModelParser::new(config.format);
        info!(
            "Initializing Posterous API at {} ({:?})",
            config.api_url(),
            config.format
        );

        Ok(Self {
            auth: Authenticator::new(AuthConfig::from_credentials(credentials)),
            http,
            parser,
            config,
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Underlying transport, shared with the backup media downloader
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Call an endpoint and parse its response
    pub async fn execute(&self, method: &ApiMethod, args: Args) -> Result<Payload> {
        let params = method.bind(&args)?;

        if method.requires_auth && !self.auth.is_configured() {
            return Err(Error::authentication(format!(
                "{} needs a username and password",
                method.path
            )));
        }

        debug!("Calling {} with {} params", method.path, params.len());
        let auth = self.auth.is_configured().then_some(&self.auth);
        let body = match self
            .http
            .send(method.method, method.path, &params, auth)
            .await
        {
            Ok(body) => body,
            Err(err) => return Err(self.service_error(err)),
        };

        self.parser.parse(method.result, method.list, &body)
    }

    /// An XML error envelope in a failed response takes precedence over the
    /// bare status
    fn service_error(&self, err: Error) -> Error {
        if self.config.format == ResponseFormat::Xml {
            if let Error::HttpStatus { body, .. } = &err {
                if let Err(api @ Error::Api { .. }) = self.parser.check_envelope(body) {
                    return api;
                }
            }
        }
        err
    }

    // ========================================================================
    // Endpoints
    // ========================================================================

    /// All sites of the authenticated account
    pub async fn get_sites(&self) -> Result<Vec<Site>> {
        self.execute(&GET_SITES, Args::new()).await?.into_sites()
    }

    /// One page of posts from a site
    pub async fn get_posts(&self, site_id: i64, page: u32, num_posts: u32) -> Result<Vec<Post>> {
        let args = Args::new()
            .set("site_id", site_id)
            .set("page", page)
            .set("num_posts", num_posts);
        self.read_posts(args).await
    }

    /// Posts matching arbitrary `readposts` arguments
    pub async fn read_posts(&self, args: Args) -> Result<Vec<Post>> {
        self.execute(&READ_POSTS, args).await?.into_posts()
    }

    /// Create a post and return it as stored by the service
    pub async fn new_post(&self, args: Args) -> Result<Post> {
        first(self.execute(&NEW_POST, args).await?.into_posts()?)
    }

    /// Comment on a post
    pub async fn new_comment(
        &self,
        post_id: i64,
        comment: &str,
        date: Option<NaiveDateTime>,
    ) -> Result<Comment> {
        let args = Args::new()
            .set("post_id", post_id)
            .set("comment", comment)
            .set_opt("date", date);
        first(self.execute(&NEW_COMMENT, args).await?.into_comments()?)
    }

    /// Tags used on a site
    pub async fn get_tags(&self, site_id: i64) -> Result<Vec<Tag>> {
        let args = Args::new().set("site_id", site_id);
        self.execute(&GET_TAGS, args).await?.into_tags()
    }
}

fn first<T>(items: Vec<T>) -> Result<T> {
    items
        .into_iter()
        .next()
        .ok_or_else(|| Error::decode("response contained no record"))
}
