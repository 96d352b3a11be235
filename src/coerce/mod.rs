//! Field coercion module
//!
//! Converts raw decoded field values into typed values.
//!
//! # Overview
//!
//! Coercion is driven purely by the field *name*: `id` is always an integer,
//! `private` is always a boolean and `date` is always a timestamp, no matter
//! which entity the field belongs to. The lookup table is built once and never
//! mutated.

mod table;
mod timestamp;

pub use table::{coerce, coercion_for, parse_bool, Coercion, FieldValue};
pub use timestamp::{format_date, parse_date, serde_date, DATE_FORMAT};
