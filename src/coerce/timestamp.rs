//! Posterous date parsing
//!
//! Dates arrive as `"Sun, 03 May 2009 19:58:58 -0800"`. The trailing offset is
//! split off and applied by hand, yielding a naive timestamp in UTC.

use crate::error::{Error, Result};
use chrono::{Duration, NaiveDateTime};

/// Fixed format of the date prefix (everything before the offset)
pub const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";

/// Prefix format used by the JSON revision of the API
const SLASHED_DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Parse a service date into a naive UTC timestamp
pub fn parse_date(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();

    let (prefix, offset_token) = trimmed
        .rsplit_once(' ')
        .ok_or_else(|| Error::parse("date", raw, "missing timezone offset"))?;

    let offset = parse_offset(offset_token).ok_or_else(|| {
        Error::parse(
            "date",
            raw,
            format!("invalid timezone offset {offset_token:?}, expected ±HHMM"),
        )
    })?;

    let prefix = prefix.trim_end();
    let local = NaiveDateTime::parse_from_str(prefix, DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(prefix, SLASHED_DATE_FORMAT))
        .map_err(|e| Error::parse("date", raw, e.to_string()))?;

    Ok(local - offset)
}

/// Render a UTC timestamp in the wire format
pub fn format_date(ts: &NaiveDateTime) -> String {
    format!("{} +0000", ts.format(DATE_FORMAT))
}

/// Parse a signed `HHMM` offset into a duration east of UTC
fn parse_offset(token: &str) -> Option<Duration> {
    let (sign, digits) = match token.as_bytes().first()? {
        b'+' => (1, &token[1..]),
        b'-' => (-1, &token[1..]),
        _ => return None,
    };

    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i64 = digits[..2].parse().ok()?;
    let minutes: i64 = digits[2..].parse().ok()?;
    if minutes >= 60 {
        return None;
    }

    Some(Duration::minutes(sign * (hours * 60 + minutes)))
}

/// Serde helpers rendering optional timestamps as `YYYY-MM-DD HH:MM:SS`
pub mod serde_date {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    const BACKUP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.collect_str(&ts.format(BACKUP_FORMAT)),
            None => serializer.serialize_none(),
        }
    }
}
