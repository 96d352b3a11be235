//! JSON decoder
//!
//! The JSON revision of the API returns the whole document up front, so the
//! tree is walked after parsing and reshaped to match the XML decoder's
//! output: `comment`/`comments` and `media` become arrays and every media
//! entry goes through the same deferred typing as the streaming path.

use super::media::MediaBag;
use super::types::{push_list, ResponseDecoder};
use super::list_key;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use tracing::debug;

/// JSON decoder for the later API revision
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }
}

impl ResponseDecoder for JsonDecoder {
    fn decode_tree(&self, body: &str) -> Result<JsonValue> {
        let value: JsonValue = serde_json::from_str(body)?;
        Ok(normalize(value))
    }

    fn decode_records(&self, body: &str, element: &str) -> Result<Vec<JsonValue>> {
        let records = match self.decode_tree(body)? {
            JsonValue::Array(items) => items,
            JsonValue::Object(mut map) => {
                match map.remove(list_key(element)).or_else(|| map.remove(element)) {
                    Some(JsonValue::Array(items)) => items,
                    Some(value) => vec![value],
                    None if map.is_empty() => Vec::new(),
                    None => vec![JsonValue::Object(map)],
                }
            }
            JsonValue::Null => Vec::new(),
            other => {
                return Err(Error::decode(format!(
                    "expected an array or object of {element} records, got {other}"
                )))
            }
        };
        debug!("Decoded {} {element} records", records.len());
        Ok(records)
    }
}

fn normalize(value: JsonValue) -> JsonValue {
    match value {
        JsonValue::Array(items) => JsonValue::Array(items.into_iter().map(normalize).collect()),
        JsonValue::Object(map) => JsonValue::Object(normalize_object(map)),
        other => other,
    }
}

fn normalize_object(map: JsonObject) -> JsonObject {
    let mut out = JsonObject::new();
    for (key, child) in map {
        match key.as_str() {
            "media" => {
                let items = into_list(child);
                out.entry("media").or_insert_with(|| JsonValue::Array(Vec::new()));
                for item in items {
                    push_list(&mut out, "media", commit_media(item));
                }
            }
            "comment" | "comments" => {
                let items = into_list(child);
                out.entry(list_key("comment"))
                    .or_insert_with(|| JsonValue::Array(Vec::new()));
                for item in items {
                    push_list(&mut out, list_key("comment"), normalize(item));
                }
            }
            _ => {
                out.insert(key, normalize(child));
            }
        }
    }
    out
}

fn into_list(value: JsonValue) -> Vec<JsonValue> {
    match value {
        JsonValue::Array(items) => items,
        JsonValue::Null => Vec::new(),
        other => vec![other],
    }
}

fn commit_media(item: JsonValue) -> JsonValue {
    match item {
        JsonValue::Object(map) => MediaBag::from_object(map).commit(),
        other => other,
    }
}
