//! Entity builders
//!
//! Turn generic decoded nodes into typed entities. Every declared field goes
//! through [`coerce`] by name; undeclared fields are kept raw in `extra` (or
//! dropped, for media variants).

use super::types::{
    Audio, Comment, Image, Media, Post, Site, Tag, UnrecognizedMedia, Video, AUDIO_FIELDS,
    IMAGE_FIELDS, VIDEO_FIELDS,
};
use crate::coerce::{coerce, FieldValue};
use crate::decode::MediaKind;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// Construct an entity from one decoded node
pub trait FromNode: Sized {
    /// Entity name used in error messages
    const ENTITY: &'static str;

    /// Build the entity from a decoded node
    fn from_node(node: &JsonValue) -> Result<Self>;
}

/// Build one entity per decoded record
pub fn build_all<T: FromNode>(records: &[JsonValue]) -> Result<Vec<T>> {
    records.iter().map(T::from_node).collect()
}

/// Entities assembled field by field from a flat node
trait FieldSet: Default {
    const FIELDS: &'static [&'static str];

    /// Store a coerced value for a declared field
    fn set(&mut self, name: &str, value: FieldValue);

    /// Keep an undeclared field; dropped unless overridden
    fn keep_extra(&mut self, _name: &str, _raw: &JsonValue) {}
}

fn build_fields<T: FieldSet>(map: &JsonObject, skip: &[&str]) -> Result<T> {
    let mut entity = T::default();
    for (name, raw) in map {
        if skip.contains(&name.as_str()) {
            continue;
        }
        if T::FIELDS.contains(&name.as_str()) {
            entity.set(name, coerce(name, raw)?);
        } else {
            entity.keep_extra(name, raw);
        }
    }
    Ok(entity)
}

fn expect_object<'a>(entity: &str, node: &'a JsonValue) -> Result<&'a JsonObject> {
    node.as_object().ok_or_else(|| {
        Error::decode(format!(
            "expected an object for {entity}, got {}",
            short(node)
        ))
    })
}

fn short(node: &JsonValue) -> String {
    let mut rendered = node.to_string();
    if rendered.len() > 60 {
        let mut cut = 60;
        while !rendered.is_char_boundary(cut) {
            cut -= 1;
        }
        rendered.truncate(cut);
        rendered.push_str("...");
    }
    rendered
}

/// Children that are always a list, whatever the source cardinality
fn as_list(node: &JsonValue) -> Vec<&JsonValue> {
    match node {
        JsonValue::Array(items) => items.iter().collect(),
        JsonValue::Null => Vec::new(),
        other => vec![other],
    }
}

// ============================================================================
// Site
// ============================================================================

impl FieldSet for Site {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "url",
        "hostname",
        "private",
        "primary",
        "commentsenabled",
        "num_posts",
    ];

    fn set(&mut self, name: &str, value: FieldValue) {
        match name {
            "id" => self.id = value.as_integer(),
            "name" => self.name = value.into_text(),
            "url" => self.url = value.into_text(),
            "hostname" => self.hostname = value.into_text(),
            "private" => self.private = value.as_bool(),
            "primary" => self.primary = value.as_bool(),
            "commentsenabled" => self.commentsenabled = value.as_bool(),
            "num_posts" => self.num_posts = value.as_integer(),
            _ => {}
        }
    }

    fn keep_extra(&mut self, name: &str, raw: &JsonValue) {
        self.extra.insert(name.to_string(), raw.clone());
    }
}

impl FromNode for Site {
    const ENTITY: &'static str = "site";

    fn from_node(node: &JsonValue) -> Result<Self> {
        build_fields(expect_object(Self::ENTITY, node)?, &[])
    }
}

// ============================================================================
// Post
// ============================================================================

impl FieldSet for Post {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "url",
        "link",
        "body",
        "date",
        "views",
        "private",
        "commentsenabled",
        "author",
        "authorpic",
    ];

    fn set(&mut self, name: &str, value: FieldValue) {
        match name {
            "id" => self.id = value.as_integer(),
            "title" => self.title = value.into_text(),
            "url" => self.url = value.into_text(),
            "link" => self.link = value.into_text(),
            "body" => self.body = value.into_text(),
            "date" => self.date = value.as_timestamp(),
            "views" => self.views = value.as_integer(),
            "private" => self.private = value.as_bool(),
            "commentsenabled" => self.commentsenabled = value.as_bool(),
            "author" => self.author = value.into_text(),
            "authorpic" => self.authorpic = value.into_text(),
            _ => {}
        }
    }

    fn keep_extra(&mut self, name: &str, raw: &JsonValue) {
        self.extra.insert(name.to_string(), raw.clone());
    }
}

impl FromNode for Post {
    const ENTITY: &'static str = "post";

    fn from_node(node: &JsonValue) -> Result<Self> {
        let map = expect_object(Self::ENTITY, node)?;
        let mut post: Post = build_fields(map, &["comments", "comment", "media"])?;

        for key in ["comments", "comment"] {
            if let Some(children) = map.get(key) {
                for child in as_list(children) {
                    post.comments.push(Comment::from_node(child)?);
                }
            }
        }
        if let Some(children) = map.get("media") {
            for child in as_list(children) {
                post.media.push(Media::from_node(child)?);
            }
        }

        Ok(post)
    }
}

// ============================================================================
// Comment
// ============================================================================

impl FieldSet for Comment {
    const FIELDS: &'static [&'static str] = &["body", "date", "author", "authorpic"];

    fn set(&mut self, name: &str, value: FieldValue) {
        match name {
            "body" => self.body = value.into_text(),
            "date" => self.date = value.as_timestamp(),
            "author" => self.author = value.into_text(),
            "authorpic" => self.authorpic = value.into_text(),
            _ => {}
        }
    }

    fn keep_extra(&mut self, name: &str, raw: &JsonValue) {
        self.extra.insert(name.to_string(), raw.clone());
    }
}

impl FromNode for Comment {
    const ENTITY: &'static str = "comment";

    fn from_node(node: &JsonValue) -> Result<Self> {
        build_fields(expect_object(Self::ENTITY, node)?, &[])
    }
}

// ============================================================================
// Tag
// ============================================================================

impl FieldSet for Tag {
    const FIELDS: &'static [&'static str] = &["id", "tag_string", "count"];

    fn set(&mut self, name: &str, value: FieldValue) {
        match name {
            "id" => self.id = value.as_integer(),
            "tag_string" => self.tag_string = value.into_text(),
            "count" => self.count = value.as_integer(),
            _ => {}
        }
    }

    fn keep_extra(&mut self, name: &str, raw: &JsonValue) {
        self.extra.insert(name.to_string(), raw.clone());
    }
}

impl FromNode for Tag {
    const ENTITY: &'static str = "tag";

    fn from_node(node: &JsonValue) -> Result<Self> {
        build_fields(expect_object(Self::ENTITY, node)?, &[])
    }
}

// ============================================================================
// Media
// ============================================================================

impl FieldSet for Image {
    const FIELDS: &'static [&'static str] = IMAGE_FIELDS;

    fn set(&mut self, name: &str, value: FieldValue) {
        match name {
            "medium_filesize" => self.medium_filesize = value.as_integer(),
            "medium_height" => self.medium_height = value.as_integer(),
            "medium_width" => self.medium_width = value.as_integer(),
            "medium_url" => self.medium_url = value.into_text(),
            "thumb_filesize" => self.thumb_filesize = value.as_integer(),
            "thumb_height" => self.thumb_height = value.as_integer(),
            "thumb_width" => self.thumb_width = value.as_integer(),
            "thumb_url" => self.thumb_url = value.into_text(),
            _ => {}
        }
    }
}

impl FieldSet for Audio {
    const FIELDS: &'static [&'static str] = AUDIO_FIELDS;

    fn set(&mut self, name: &str, value: FieldValue) {
        match name {
            "url" => self.url = value.into_text(),
            "filesize" => self.filesize = value.as_integer(),
            "album" => self.album = value.into_text(),
            "song" => self.song = value.into_text(),
            "artist" => self.artist = value.into_text(),
            _ => {}
        }
    }
}

impl FieldSet for Video {
    const FIELDS: &'static [&'static str] = VIDEO_FIELDS;

    fn set(&mut self, name: &str, value: FieldValue) {
        match name {
            "url" => self.url = value.into_text(),
            "filesize" => self.filesize = value.as_integer(),
            "thumb" => self.thumb = value.into_text(),
            "flv" => self.flv = value.into_text(),
            "mp4" => self.mp4 = value.into_text(),
            _ => {}
        }
    }
}

impl FromNode for Media {
    const ENTITY: &'static str = "media";

    fn from_node(node: &JsonValue) -> Result<Self> {
        let map = expect_object(Self::ENTITY, node)?;
        let raw_kind = map.get("type").and_then(JsonValue::as_str);

        match raw_kind.and_then(MediaKind::from_wire) {
            Some(MediaKind::Image) => Ok(Media::Image(build_fields(map, &["type"])?)),
            Some(MediaKind::Audio) => Ok(Media::Audio(build_fields(map, &["type"])?)),
            Some(MediaKind::Video) => Ok(Media::Video(build_fields(map, &["type"])?)),
            None => {
                let mut fields = map.clone();
                fields.remove("type");
                Ok(Media::Unrecognized(UnrecognizedMedia {
                    kind: raw_kind.map(str::to_string),
                    fields,
                }))
            }
        }
    }
}
