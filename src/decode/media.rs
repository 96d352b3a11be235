//! Deferred media typing
//!
//! A `<media>` element announces its variant through the *value* of a `type`
//! child that may appear anywhere among its siblings. Fields are buffered in a
//! neutral bag, the discriminator is recorded when seen, and the typed entry is
//! produced only when the element closes.

use super::types::{insert_collapsing, MediaKind};
use crate::models::{IMAGE_FIELDS, IMAGE_SIZE_PREFIXES};
use crate::types::{JsonObject, JsonValue};
use tracing::debug;

/// Field name carrying the media discriminator
pub(crate) const TYPE_FIELD: &str = "type";

/// Buffered fields of a media element awaiting its discriminator
#[derive(Debug, Default)]
pub(crate) struct MediaBag {
    fields: JsonObject,
    kind: Option<String>,
}

impl MediaBag {
    /// Wrap an already materialized media object (JSON path)
    pub fn from_object(mut fields: JsonObject) -> Self {
        let kind = match fields.remove(TYPE_FIELD) {
            Some(JsonValue::String(raw)) => Some(raw.trim().to_string()),
            Some(JsonValue::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };
        Self { fields, kind }
    }

    /// Record the discriminator value
    pub fn resolve_type(&mut self, raw: &str) {
        self.kind = Some(raw.trim().to_string());
    }

    /// Buffer a completed child field
    pub fn insert(&mut self, key: String, value: JsonValue) {
        insert_collapsing(&mut self.fields, key, value);
    }

    /// Emit the typed media entry
    ///
    /// Images get their `medium`/`thumb` children flattened into
    /// `medium_*`/`thumb_*` fields; combinations outside the image field set
    /// are discarded. A `type` value naming no known variant is kept verbatim
    /// so the builder can surface the entry as unrecognized media.
    pub fn commit(self) -> JsonValue {
        let resolved = self.kind.as_deref().and_then(MediaKind::from_wire);

        let mut out = match resolved {
            Some(MediaKind::Image) => flatten_image(self.fields),
            _ => self.fields,
        };

        match (resolved, self.kind) {
            (Some(kind), _) => {
                out.insert(TYPE_FIELD.to_string(), JsonValue::from(kind.as_str()));
            }
            (None, Some(raw)) => {
                debug!("Keeping media with unrecognized type {raw:?}");
                out.insert(TYPE_FIELD.to_string(), JsonValue::String(raw));
            }
            (None, None) => debug!("Keeping media without a type"),
        }

        JsonValue::Object(out)
    }
}

fn flatten_image(fields: JsonObject) -> JsonObject {
    let mut out = JsonObject::new();
    for (key, value) in fields {
        match value {
            JsonValue::Object(nested) if IMAGE_SIZE_PREFIXES.contains(&key.as_str()) => {
                for (child, child_value) in nested {
                    let flat = format!("{key}_{child}");
                    if IMAGE_FIELDS.contains(&flat.as_str()) {
                        out.insert(flat, child_value);
                    }
                }
            }
            other => {
                out.insert(key, other);
            }
        }
    }
    out
}
