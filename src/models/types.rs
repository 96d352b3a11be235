//! Domain entity types
//!
//! Read-only value objects built from decoded responses. Fields missing from a
//! response keep their neutral default (`None`, `false`, empty string). Fields
//! an entity does not declare are kept untyped in `extra`.

use crate::coerce::serde_date;
use crate::types::{JsonObject, JsonValue};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Field names accepted for image media, after `medium`/`thumb` flattening
pub const IMAGE_FIELDS: &[&str] = &[
    "medium_filesize",
    "medium_height",
    "medium_width",
    "medium_url",
    "thumb_filesize",
    "thumb_height",
    "thumb_width",
    "thumb_url",
];

/// Field names accepted for audio media
pub const AUDIO_FIELDS: &[&str] = &["url", "filesize", "album", "song", "artist"];

/// Field names accepted for video media
pub const VIDEO_FIELDS: &[&str] = &["url", "filesize", "thumb", "flv", "mp4"];

/// Tags that nest image fields one level deeper
pub const IMAGE_SIZE_PREFIXES: &[&str] = &["medium", "thumb"];

/// A Posterous site
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Site {
    pub id: Option<i64>,
    pub name: String,
    pub url: String,
    pub hostname: String,
    pub private: bool,
    pub primary: bool,
    pub commentsenabled: bool,
    pub num_posts: Option<i64>,
    #[serde(skip_serializing_if = "JsonObject::is_empty")]
    pub extra: JsonObject,
}

/// A post with its comments and media in document order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Post {
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
    pub link: String,
    pub body: String,
    #[serde(serialize_with = "serde_date::serialize")]
    pub date: Option<NaiveDateTime>,
    pub views: Option<i64>,
    pub private: bool,
    pub commentsenabled: bool,
    pub author: String,
    pub authorpic: String,
    pub comments: Vec<Comment>,
    pub media: Vec<Media>,
    #[serde(skip_serializing_if = "JsonObject::is_empty")]
    pub extra: JsonObject,
}

/// A comment on a post
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Comment {
    pub body: String,
    #[serde(serialize_with = "serde_date::serialize")]
    pub date: Option<NaiveDateTime>,
    pub author: String,
    pub authorpic: String,
    #[serde(skip_serializing_if = "JsonObject::is_empty")]
    pub extra: JsonObject,
}

/// A tag on a site
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tag {
    pub id: Option<i64>,
    pub tag_string: String,
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "JsonObject::is_empty")]
    pub extra: JsonObject,
}

/// Media attached to a post, discriminated by its `type` field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Media {
    Image(Image),
    Audio(Audio),
    Video(Video),
    /// A `type` value this client does not know, kept untyped
    Unrecognized(UnrecognizedMedia),
}

impl Media {
    /// Wire name of the variant
    pub fn kind(&self) -> &str {
        match self {
            Media::Image(_) => "image",
            Media::Audio(_) => "audio",
            Media::Video(_) => "video",
            Media::Unrecognized(m) => m.kind.as_deref().unwrap_or(""),
        }
    }

    /// URL of the full-size file, if the response carried one
    pub fn download_url(&self) -> Option<&str> {
        let url = match self {
            Media::Image(img) => {
                if img.medium_url.is_empty() {
                    img.thumb_url.as_str()
                } else {
                    img.medium_url.as_str()
                }
            }
            Media::Audio(audio) => audio.url.as_str(),
            Media::Video(video) => video.url.as_str(),
            Media::Unrecognized(m) => m.fields.get("url").and_then(JsonValue::as_str)?,
        };
        (!url.is_empty()).then_some(url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Image {
    pub medium_filesize: Option<i64>,
    pub medium_height: Option<i64>,
    pub medium_width: Option<i64>,
    pub medium_url: String,
    pub thumb_filesize: Option<i64>,
    pub thumb_height: Option<i64>,
    pub thumb_width: Option<i64>,
    pub thumb_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Audio {
    pub url: String,
    pub filesize: Option<i64>,
    pub album: String,
    pub song: String,
    pub artist: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Video {
    pub url: String,
    pub filesize: Option<i64>,
    pub thumb: String,
    pub flv: String,
    pub mp4: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UnrecognizedMedia {
    /// Raw `type` value, `None` when the element had no `type` child
    pub kind: Option<String>,
    pub fields: JsonObject,
}
