//! Response decoder module
//!
//! Supports: XML (streaming) and JSON (materialized)
//!
//! # Overview
//!
//! The decode module turns a raw API payload into a generic tree of
//! [`serde_json::Value`] nodes, resolving the nesting quirks of the Posterous
//! responses:
//!
//! - one child stays a scalar or object, repeated children become an array
//! - `comment` and `media` children are always gathered into arrays
//! - media entries are typed by the value of their `type` child, and image
//!   `medium`/`thumb` children are flattened to `medium_*`/`thumb_*`
//! - an `<err>` inside `<rsp>` aborts the decode with [`Error::Api`]
//!
//! [`Error::Api`]: crate::error::Error::Api

mod json;
mod media;
mod types;
mod xml;

pub use json::JsonDecoder;
pub use types::{decoder_for, MediaKind, ResponseDecoder};
pub use xml::XmlDecoder;

/// Envelope element wrapping every XML response
pub const ENVELOPE_TAG: &str = "rsp";

/// Error element inside the envelope
pub const ERROR_TAG: &str = "err";

pub const MEDIA_TAG: &str = "media";
pub const COMMENT_TAG: &str = "comment";

/// Elements that decode to objects when they carry neither children nor text
pub const CONTAINER_TAGS: &[&str] = &[ENVELOPE_TAG, "site", "post", "tag", COMMENT_TAG, MEDIA_TAG];

/// Key under which records of `element` are gathered in the tree
pub fn list_key(element: &str) -> &str {
    match element {
        COMMENT_TAG => "comments",
        other => other,
    }
}
