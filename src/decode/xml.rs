//! Streaming XML decoder
//!
//! A push-down automaton over `quick-xml` events. The parser state keeps:
//!
//! - a stack of open tag names (innermost last)
//! - a parallel stack of in-progress objects, one per open tag
//! - a character accumulator, reset when an element starts and flushed
//!   (joined and trimmed) when it ends
//!
//! Closing `<comment>` or `<media>` appends the finished object to the
//! enclosing element's `comments`/`media` array. Any other closing tag is
//! attached to its parent under its own name, collapsing repeats into arrays.

use super::media::{MediaBag, TYPE_FIELD};
use super::types::{insert_collapsing, push_list, ResponseDecoder};
use super::{list_key, COMMENT_TAG, CONTAINER_TAGS, ENVELOPE_TAG, ERROR_TAG, MEDIA_TAG};
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

/// XML decoder for `<rsp>`-enveloped responses
#[derive(Debug, Clone, Default)]
pub struct XmlDecoder;

impl XmlDecoder {
    /// Create a new XML decoder
    pub fn new() -> Self {
        Self
    }

    /// Parse a document, returning the root tag name and its decoded value
    pub fn parse_document(&self, body: &str) -> Result<(String, JsonValue)> {
        let mut reader = Reader::from_str(body);
        let mut state = XmlTreeBuilder::default();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let (name, attrs) = element_parts(&e)?;
                    state.start(name, &attrs)?;
                }
                Ok(Event::Empty(e)) => {
                    let (name, attrs) = element_parts(&e)?;
                    state.start(name, &attrs)?;
                    state.end()?;
                }
                Ok(Event::End(_)) => state.end()?,
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| Error::xml(format!("invalid character data: {e}")))?;
                    state.text(&text);
                }
                Ok(Event::CData(e)) => {
                    state.text(&String::from_utf8_lossy(&e.into_inner()));
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(Error::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.buffer_position()
                    )))
                }
            }
        }

        state.finish()
    }
}

impl ResponseDecoder for XmlDecoder {
    fn decode_tree(&self, body: &str) -> Result<JsonValue> {
        self.parse_document(body).map(|(_, tree)| tree)
    }

    fn decode_records(&self, body: &str, element: &str) -> Result<Vec<JsonValue>> {
        let (root, tree) = self.parse_document(body)?;
        if root == element {
            return Ok(vec![tree]);
        }

        let records = match tree {
            JsonValue::Object(mut map) => match map.remove(list_key(element)) {
                Some(JsonValue::Array(items)) => items,
                Some(value) => vec![value],
                None => Vec::new(),
            },
            _ => Vec::new(),
        };
        debug!("Decoded {} <{element}> records", records.len());
        Ok(records)
    }
}

fn element_parts(e: &BytesStart<'_>) -> Result<(String, Vec<(String, String)>)> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| Error::xml(format!("invalid attribute in <{name}>: {e}")))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::xml(format!("invalid attribute value in <{name}>: {e}")))?
            .into_owned();
        attrs.push((key, value));
    }
    Ok((name, attrs))
}

/// In-progress value for one open element
#[derive(Debug)]
enum Frame {
    Node(JsonObject),
    Media(MediaBag),
}

/// Parser state for the streaming decode
#[derive(Debug, Default)]
struct XmlTreeBuilder {
    tags: Vec<String>,
    objects: Vec<Frame>,
    text: String,
    root: Option<(String, JsonValue)>,
}

impl XmlTreeBuilder {
    fn start(&mut self, name: String, attrs: &[(String, String)]) -> Result<()> {
        if name == ERROR_TAG && self.tags.last().is_some_and(|t| t == ENVELOPE_TAG) {
            return Err(envelope_error(attrs));
        }

        let frame = if name == MEDIA_TAG {
            Frame::Media(MediaBag::default())
        } else {
            Frame::Node(JsonObject::new())
        };
        self.tags.push(name);
        self.objects.push(frame);
        self.text.clear();
        Ok(())
    }

    fn text(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    fn end(&mut self) -> Result<()> {
        let (Some(tag), Some(frame)) = (self.tags.pop(), self.objects.pop()) else {
            return Err(Error::xml("closing tag without a matching start"));
        };
        let text = std::mem::take(&mut self.text);

        let value = match frame {
            Frame::Media(bag) => bag.commit(),
            Frame::Node(map) if map.is_empty() && !text.trim().is_empty() => {
                JsonValue::String(text.trim().to_string())
            }
            Frame::Node(map) if map.is_empty() && !CONTAINER_TAGS.contains(&tag.as_str()) => {
                JsonValue::String(String::new())
            }
            Frame::Node(map) => JsonValue::Object(map),
        };

        let Some(parent) = self.objects.last_mut() else {
            self.root = Some((tag, value));
            return Ok(());
        };

        let owned_list = tag == MEDIA_TAG || tag == COMMENT_TAG;
        match parent {
            Frame::Node(map) if owned_list => push_list(map, list_key(&tag), value),
            Frame::Node(map) => insert_collapsing(map, tag, value),
            Frame::Media(bag) if tag == TYPE_FIELD => {
                if let Some(raw) = value.as_str() {
                    bag.resolve_type(raw);
                } else {
                    bag.insert(tag, value);
                }
            }
            Frame::Media(bag) => bag.insert(tag, value),
        }
        Ok(())
    }

    fn finish(self) -> Result<(String, JsonValue)> {
        if let Some(open) = self.tags.last() {
            return Err(Error::xml(format!(
                "unexpected end of document inside <{open}>"
            )));
        }
        self.root
            .ok_or_else(|| Error::xml("document has no root element"))
    }
}

/// Build the API error carried by `<err msg=".." status=".."/>`
fn envelope_error(attrs: &[(String, String)]) -> Error {
    let attr = |key: &str| {
        attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    };
    let message = attr("msg").unwrap_or_else(|| "unknown error".to_string());
    let status = attr("status").or_else(|| attr("code")).unwrap_or_default();
    Error::api(message, status)
}
