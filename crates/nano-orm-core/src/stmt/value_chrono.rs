use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{stmt::Value, Error};

/// Canonical text form of a datetime column: `YYYY-MM-DD HH:MM:SS.ffffff`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Formats a datetime in the canonical text form.
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// Parses the text form of a datetime column.
///
/// Accepts a space or `T` between date and time, with or without fractional
/// seconds. A trailing UTC offset (`Z`, `+00`, `+02:00`) is accepted and
/// dropped, keeping the wall-clock time as written. A bare date is read as
/// midnight.
pub fn parse_datetime(src: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
    const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

    let src = src.trim();

    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(src, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(src)
                .ok()
                .or_else(|| {
                    OFFSET_FORMATS
                        .iter()
                        .find_map(|format| DateTime::parse_from_str(src, format).ok())
                })
                .map(|value| value.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(src, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::DateTime(value) => Ok(value),
            Value::String(text) => match parse_datetime(&text) {
                Some(value) => Ok(value),
                None => Err(Error::type_conversion(
                    Value::String(text),
                    "NaiveDateTime",
                )),
            },
            _ => Err(Error::type_conversion(value, "NaiveDateTime")),
        }
    }
}
