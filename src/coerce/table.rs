//! Coercion table and typed field values

use super::timestamp::parse_date;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Conversion applied to a named field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Signed integer; non-numeric text is an error
    Integer,
    /// Case-insensitive `"true"`, anything else is false
    Boolean,
    /// Service date format with a `±HHMM` offset
    Timestamp,
}

static COERCIONS: Lazy<HashMap<&'static str, Coercion>> = Lazy::new(|| {
    use Coercion::{Boolean, Integer, Timestamp};

    HashMap::from([
        ("id", Integer),
        ("views", Integer),
        ("num_posts", Integer),
        ("commentscount", Integer),
        ("count", Integer),
        ("filesize", Integer),
        ("thumb_filesize", Integer),
        ("medium_filesize", Integer),
        ("thumb_width", Integer),
        ("medium_width", Integer),
        ("thumb_height", Integer),
        ("medium_height", Integer),
        ("private", Boolean),
        ("primary", Boolean),
        ("commentsenabled", Boolean),
        ("date", Timestamp),
    ])
});

/// Look up the coercion registered for a field name
pub fn coercion_for(field: &str) -> Option<Coercion> {
    COERCIONS.get(field).copied()
}

/// A field value after coercion
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Raw text, passed through unchanged
    Text(String),
    Integer(i64),
    Boolean(bool),
    Timestamp(NaiveDateTime),
    /// JSON `null`, or empty text in a typed field
    Null,
}

impl FieldValue {
    /// Integer payload, if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean payload; anything that is not `Boolean(true)` is false
    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Boolean(true))
    }

    /// Timestamp payload, if this is a timestamp
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Render the value as text
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Timestamp(ts) => super::format_date(&ts),
            FieldValue::Null => String::new(),
        }
    }
}

/// Lenient boolean parsing: only a case-insensitive `"true"` is true
pub fn parse_bool(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

/// Coerce a decoded value according to its field name
///
/// Fields without a registered coercion pass through as text. Integer and
/// timestamp fields fail with [`Error::Parse`] on malformed input; booleans
/// never fail.
pub fn coerce(field: &str, value: &JsonValue) -> Result<FieldValue> {
    let Some(coercion) = coercion_for(field) else {
        return Ok(match value {
            JsonValue::Null => FieldValue::Null,
            JsonValue::String(s) => FieldValue::Text(s.clone()),
            other => FieldValue::Text(other.to_string()),
        });
    };

    match (coercion, value) {
        (_, JsonValue::Null) => Ok(FieldValue::Null),

        (Coercion::Boolean, JsonValue::Bool(b)) => Ok(FieldValue::Boolean(*b)),
        (Coercion::Boolean, JsonValue::String(s)) => Ok(FieldValue::Boolean(parse_bool(s))),
        (Coercion::Boolean, _) => Ok(FieldValue::Boolean(false)),

        (Coercion::Integer, JsonValue::Number(n)) => n
            .as_i64()
            .map(FieldValue::Integer)
            .ok_or_else(|| Error::parse(field, n.to_string(), "not an integer")),
        (Coercion::Integer, JsonValue::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(FieldValue::Null);
            }
            trimmed
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|e| Error::parse(field, s.as_str(), e.to_string()))
        }

        (Coercion::Timestamp, JsonValue::String(s)) => {
            if s.trim().is_empty() {
                return Ok(FieldValue::Null);
            }
            parse_date(s).map(FieldValue::Timestamp).map_err(|e| match e {
                Error::Parse { value, reason, .. } => Error::parse(field, value, reason),
                other => other,
            })
        }

        (_, other) => Err(Error::parse(
            field,
            other.to_string(),
            format!("unexpected {} value", json_kind(other)),
        )),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
