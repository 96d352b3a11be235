//! Decoder types and traits
//!
//! Defines the core decoder abstractions.

use crate::error::Result;
use crate::types::{JsonValue, ResponseFormat};

/// Trait for decoding response bodies into generic trees
///
/// Both implementations produce the same shape: objects keyed by field name,
/// repeated children collapsed into arrays, `comments` and `media` always
/// arrays, and media entries already resolved to their variant.
pub trait ResponseDecoder: Send + Sync {
    /// Decode the whole response body into a generic tree
    fn decode_tree(&self, body: &str) -> Result<JsonValue>;

    /// Decode the response body and return every `element` record it carries
    fn decode_records(&self, body: &str, element: &str) -> Result<Vec<JsonValue>>;
}

/// Create the decoder for a response format
pub fn decoder_for(format: ResponseFormat) -> Box<dyn ResponseDecoder> {
    match format {
        ResponseFormat::Xml => Box::new(super::XmlDecoder::new()),
        ResponseFormat::Json => Box::new(super::JsonDecoder::new()),
    }
}

/// Variant of a media element, named by the value of its `type` child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
    Video,
}

impl MediaKind {
    /// Resolve a `type` value; unknown values yield `None`
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "image" => Some(Self::Image),
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    /// Canonical wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

/// Collapse repeated keys: the second occurrence turns the value into an array
pub(crate) fn insert_collapsing(
    map: &mut crate::types::JsonObject,
    key: String,
    value: JsonValue,
) {
    match map.get_mut(&key) {
        Some(JsonValue::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = JsonValue::Array(vec![first, value]);
        }
        None => {
            map.insert(key, value);
        }
    }
}

/// Append to a key that is always an array
pub(crate) fn push_list(map: &mut crate::types::JsonObject, key: &str, value: JsonValue) {
    let entry = map
        .entry(key.to_string())
        .or_insert_with(|| JsonValue::Array(Vec::new()));
    match entry {
        JsonValue::Array(items) => items.push(value),
        other => {
            let first = other.take();
            *other = JsonValue::Array(vec![first, value]);
        }
    }
}
