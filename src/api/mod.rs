//! API method binder
//!
//! Each endpoint is a static [`ApiMethod`] descriptor: path, HTTP verb,
//! accepted parameters with their types, whether credentials are required and
//! what the response decodes to. [`PosterousApi`] validates the caller's
//! arguments against a descriptor, sends the request and hands the body to the
//! response parser.
//!
//! # Example
//!
//! ```no_run
//! use posterous::api::PosterousApi;
//! use posterous::auth::Credentials;
//! use posterous::config::ClientConfig;
//!
//! # async fn run() -> posterous::Result<()> {
//! let api = PosterousApi::new(
//!     ClientConfig::default(),
//!     Some(Credentials::new("me@example.com", "secret")),
//! )?;
//! for site in api.get_sites().await? {
//!     let posts = api.get_posts(site.id.unwrap_or_default(), 1, 10).await?;
//!     println!("{}: {} posts", site.hostname, posts.len());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod endpoints;
mod method;

pub use client::PosterousApi;
pub use method::{strip_empty, ApiMethod, Args, ParamSpec, ParamType, ParamValue};
