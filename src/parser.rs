//! Response parsing pipeline
//!
//! Routes a raw response body through the decoder for its format and then
//! through the entity builder for the expected result kind.

use crate::decode::{decoder_for, ResponseDecoder};
use crate::error::{Error, Result};
use crate::models::{build_all, Comment, FromNode, Post, Site, Tag};
use crate::types::{JsonValue, ResponseFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Entity kind an endpoint returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Site,
    Post,
    Comment,
    Tag,
}

impl EntityKind {
    /// Element name of one record of this kind
    pub fn element(self) -> &'static str {
        match self {
            Self::Site => Site::ENTITY,
            Self::Post => Post::ENTITY,
            Self::Comment => Comment::ENTITY,
            Self::Tag => Tag::ENTITY,
        }
    }
}

/// Typed entities parsed from one response
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Sites(Vec<Site>),
    Posts(Vec<Post>),
    Comments(Vec<Comment>),
    Tags(Vec<Tag>),
}

impl Payload {
    /// Number of entities carried
    pub fn len(&self) -> usize {
        match self {
            Payload::Sites(v) => v.len(),
            Payload::Posts(v) => v.len(),
            Payload::Comments(v) => v.len(),
            Payload::Tags(v) => v.len(),
        }
    }

    /// Whether no entity was parsed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entity kind carried
    pub fn kind(&self) -> EntityKind {
        match self {
            Payload::Sites(_) => EntityKind::Site,
            Payload::Posts(_) => EntityKind::Post,
            Payload::Comments(_) => EntityKind::Comment,
            Payload::Tags(_) => EntityKind::Tag,
        }
    }

    pub fn into_sites(self) -> Result<Vec<Site>> {
        match self {
            Payload::Sites(v) => Ok(v),
            other => Err(other.mismatch(EntityKind::Site)),
        }
    }

    pub fn into_posts(self) -> Result<Vec<Post>> {
        match self {
            Payload::Posts(v) => Ok(v),
            other => Err(other.mismatch(EntityKind::Post)),
        }
    }

    pub fn into_comments(self) -> Result<Vec<Comment>> {
        match self {
            Payload::Comments(v) => Ok(v),
            other => Err(other.mismatch(EntityKind::Comment)),
        }
    }

    pub fn into_tags(self) -> Result<Vec<Tag>> {
        match self {
            Payload::Tags(v) => Ok(v),
            other => Err(other.mismatch(EntityKind::Tag)),
        }
    }

    fn mismatch(&self, wanted: EntityKind) -> Error {
        Error::decode(format!(
            "expected {} records, parsed {}",
            wanted.element(),
            self.kind().element()
        ))
    }
}

/// Decoder plus builder for one response format
pub struct ModelParser {
    decoder: Box<dyn ResponseDecoder>,
}

impl ModelParser {
    /// Create a parser for a response format
    pub fn new(format: ResponseFormat) -> Self {
        Self {
            decoder: decoder_for(format),
        }
    }

    /// Parse a response body into entities of `kind`
    ///
    /// When `list` is false exactly the first record is kept and an empty
    /// response is an error.
    pub fn parse(&self, kind: EntityKind, list: bool, body: &str) -> Result<Payload> {
        let mut records = self.decoder.decode_records(body, kind.element())?;

        if !list {
            if records.is_empty() {
                return Err(Error::decode(format!(
                    "response contained no {} record",
                    kind.element()
                )));
            }
            records.truncate(1);
        }

        let payload = build_payload(kind, &records)?;
        debug!("Parsed {} {} entities", payload.len(), kind.element());
        Ok(payload)
    }

    /// Decode a body only to surface an error envelope it may carry
    pub fn check_envelope(&self, body: &str) -> Result<()> {
        self.decoder.decode_tree(body).map(|_| ())
    }
}

impl std::fmt::Debug for ModelParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelParser").finish_non_exhaustive()
    }
}

fn build_payload(kind: EntityKind, records: &[JsonValue]) -> Result<Payload> {
    Ok(match kind {
        EntityKind::Site => Payload::Sites(build_all(records)?),
        EntityKind::Post => Payload::Posts(build_all(records)?),
        EntityKind::Comment => Payload::Comments(build_all(records)?),
        EntityKind::Tag => Payload::Tags(build_all(records)?),
    })
}

/// Parse a `getsites` response
pub fn decode_sites(body: &str, format: ResponseFormat) -> Result<Vec<Site>> {
    ModelParser::new(format)
        .parse(EntityKind::Site, true, body)?
        .into_sites()
}

/// Parse a `readposts` response
pub fn decode_posts(body: &str, format: ResponseFormat) -> Result<Vec<Post>> {
    ModelParser::new(format)
        .parse(EntityKind::Post, true, body)?
        .into_posts()
}

/// Parse a `gettags` response
pub fn decode_tags(body: &str, format: ResponseFormat) -> Result<Vec<Tag>> {
    ModelParser::new(format)
        .parse(EntityKind::Tag, true, body)?
        .into_tags()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_element() {
        assert_eq!(EntityKind::Site.element(), "site");
        assert_eq!(EntityKind::Comment.element(), "comment");
    }

    #[test]
    fn test_parse_single_keeps_first() {
        let body = r"<rsp><post><id>1</id></post><post><id>2</id></post></rsp>";
        let posts = ModelParser::new(ResponseFormat::Xml)
            .parse(EntityKind::Post, false, body)
            .unwrap()
            .into_posts()
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, Some(1));
    }

    #[test]
    fn test_parse_single_requires_a_record() {
        let err = ModelParser::new(ResponseFormat::Xml)
            .parse(EntityKind::Comment, false, r#"<rsp stat="ok"/>"#)
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_payload_mismatch() {
        let err = Payload::Tags(vec![]).into_sites().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to decode response: expected site records, parsed tag"
        );
        assert!(Payload::Sites(vec![]).is_empty());
    }

    #[test]
    fn test_decode_tags() {
        let body = r"<rsp>
            <tag><id>1</id><tag_string>food</tag_string><count>4</count></tag>
            <tag><id>2</id><tag_string>travel</tag_string><count>1</count></tag>
        </rsp>";
        let tags = decode_tags(body, ResponseFormat::Xml).unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].tag_string, "food");
        assert_eq!(tags[0].count, Some(4));
    }
}
