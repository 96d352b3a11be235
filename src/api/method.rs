//! Endpoint descriptors and argument binding

use crate::coerce::format_date;
use crate::error::{Error, Result};
use crate::parser::EntityKind;
use crate::types::{Method, Params};
use chrono::NaiveDateTime;

// ============================================================================
// Parameter Types
// ============================================================================

/// Kind of value a parameter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Integer,
    Text,
    Boolean,
    Timestamp,
    /// Sent as one repeated `name[]` pair per item
    TextList,
}

impl ParamType {
    fn describe(self) -> &'static str {
        match self {
            ParamType::Integer => "integer",
            ParamType::Text => "text",
            ParamType::Boolean => "boolean",
            ParamType::Timestamp => "timestamp",
            ParamType::TextList => "list of text",
        }
    }
}

/// A parameter accepted by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub types: &'static [ParamType],
    pub required: bool,
}

impl ParamSpec {
    /// Optional parameter
    pub const fn optional(name: &'static str, types: &'static [ParamType]) -> Self {
        Self {
            name,
            types,
            required: false,
        }
    }

    /// Required parameter
    pub const fn required(name: &'static str, types: &'static [ParamType]) -> Self {
        Self {
            name,
            types,
            required: true,
        }
    }

    fn expected(&self) -> String {
        self.types
            .iter()
            .map(|t| t.describe())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

// ============================================================================
// Parameter Values
// ============================================================================

/// A caller-supplied argument value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Text(String),
    Bool(bool),
    Date(NaiveDateTime),
    List(Vec<String>),
}

impl ParamValue {
    /// Type of this value
    pub fn param_type(&self) -> ParamType {
        match self {
            ParamValue::Int(_) => ParamType::Integer,
            ParamValue::Text(_) => ParamType::Text,
            ParamValue::Bool(_) => ParamType::Boolean,
            ParamValue::Date(_) => ParamType::Timestamp,
            ParamValue::List(_) => ParamType::TextList,
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            ParamValue::Text(s) => s.is_empty(),
            ParamValue::List(items) => items.iter().all(String::is_empty),
            _ => false,
        }
    }

    /// Append the wire encoding of this value under `name`
    fn serialize_into(&self, name: &str, out: &mut Params) {
        match self {
            ParamValue::Int(n) => out.push((name.to_string(), n.to_string())),
            ParamValue::Text(s) => out.push((name.to_string(), s.clone())),
            ParamValue::Bool(b) => out.push((name.to_string(), u8::from(*b).to_string())),
            ParamValue::Date(ts) => out.push((name.to_string(), format_date(ts))),
            ParamValue::List(items) => {
                let key = format!("{name}[]");
                out.extend(items.iter().map(|item| (key.clone(), item.clone())));
            }
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(i64::from(v))
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Int(i64::from(v))
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<NaiveDateTime> for ParamValue {
    fn from(v: NaiveDateTime) -> Self {
        ParamValue::Date(v)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        ParamValue::List(v)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(v: Vec<&str>) -> Self {
        ParamValue::List(v.into_iter().map(str::to_string).collect())
    }
}

/// Named arguments for one call, in the order they were set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: Vec<(String, ParamValue)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an argument
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.values.push((name.into(), value.into()));
        self
    }

    /// Set an argument only when a value is present
    #[must_use]
    pub fn set_opt<V: Into<ParamValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    /// Look up an argument by name
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// Endpoint Descriptor
// ============================================================================

/// Declarative description of one API endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiMethod {
    /// Path below the API root
    pub path: &'static str,
    pub method: Method,
    pub params: &'static [ParamSpec],
    /// Credentials must be configured to call this endpoint
    pub requires_auth: bool,
    /// Entity kind the response decodes to
    pub result: EntityKind,
    /// Whether the response is a list or a single entity
    pub list: bool,
}

impl ApiMethod {
    /// Look up a declared parameter
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Validate `args` and encode them as request parameters
    ///
    /// Parameters are emitted in declaration order. Empty values are dropped.
    pub fn bind(&self, args: &Args) -> Result<Params> {
        for (index, (name, value)) in args.values.iter().enumerate() {
            let Some(spec) = self.param(name) else {
                return Err(Error::validation(name, self.accepted_names()));
            };
            if args.values[..index].iter().any(|(seen, _)| seen == name) {
                return Err(Error::validation(name, "a single value"));
            }
            if !spec.types.contains(&value.param_type()) {
                return Err(Error::validation(name, spec.expected()));
            }
        }

        let mut params = Params::new();
        for spec in self.params {
            match args.get(spec.name) {
                Some(value) if !value.is_empty() => value.serialize_into(spec.name, &mut params),
                _ if spec.required => {
                    return Err(Error::validation(
                        spec.name,
                        format!("a non-empty {} (required)", spec.expected()),
                    ))
                }
                _ => {}
            }
        }

        Ok(strip_empty(params))
    }

    fn accepted_names(&self) -> String {
        if self.params.is_empty() {
            return format!("no parameters for {}", self.path);
        }
        let names: Vec<_> = self.params.iter().map(|p| p.name).collect();
        format!("one of {}", names.join(", "))
    }
}

/// Drop parameters whose value is empty
pub fn strip_empty(params: Params) -> Params {
    params.into_iter().filter(|(_, v)| !v.is_empty()).collect()
}
