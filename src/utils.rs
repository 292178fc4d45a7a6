use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

use crate::types::{ApiError, BAD_REQUEST};

pub fn serialize_date<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let s = date.to_rfc3339_opts(SecondsFormat::Millis, true);
    serializer.serialize_str(&s)
}

/// Parses a path segment as a row id.
pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::bad_request(BAD_REQUEST))
}
