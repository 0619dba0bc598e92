//! Input document parsing
//!
//! Every field parser returns an explicit `Result`; the fallback policy is
//! applied here at the call sites:
//! - an entry with an unusable date is dropped
//! - an unusable value becomes `0.0`
//! - an unusable `horizon` or `seasonality` takes the configured default;
//!   a usable but non-positive `seasonality` is floored at 1
//! - an unusable document is treated as `{}`

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use forecast_api::ForecastConfig;
use forecast_spi::{ForecastRequest, History, Observation, ParseError};
use serde_json::{Map, Value};
use tracing::debug;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Decode raw bytes into a top-level JSON object.
pub fn parse_document(input: &[u8]) -> Result<Map<String, Value>, ParseError> {
    if input.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice::<Value>(input) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ParseError::MalformedDocument(format!(
            "expected an object, found {}",
            json_type(&other)
        ))),
        Err(e) => Err(ParseError::MalformedDocument(e.to_string())),
    }
}

/// Parse raw bytes into a request. Never fails.
pub fn parse_request(input: &[u8], defaults: &ForecastConfig) -> ForecastRequest {
    let document = parse_document(input).unwrap_or_else(|e| {
        debug!(error = %e, "unusable input document, treating as empty");
        Map::new()
    });
    request_from_map(&document, defaults)
}

/// Build a request from an already decoded JSON value. Never fails.
pub fn request_from_value(document: &Value, defaults: &ForecastConfig) -> ForecastRequest {
    match document {
        Value::Object(map) => request_from_map(map, defaults),
        other => {
            debug!(found = json_type(other), "input is not an object, treating as empty");
            request_from_map(&Map::new(), defaults)
        }
    }
}

fn request_from_map(document: &Map<String, Value>, defaults: &ForecastConfig) -> ForecastRequest {
    let history = parse_history(document.get("series"));
    let horizon = parse_count(document.get("horizon"), "horizon").unwrap_or(defaults.horizon);
    let seasonality = parse_period(document.get("seasonality"), "seasonality")
        .unwrap_or(defaults.seasonality);

    ForecastRequest::new(history, horizon, seasonality)
}

/// Parse the `series` array into a sorted history.
pub fn parse_history(series: Option<&Value>) -> History {
    let Some(Value::Array(entries)) = series else {
        if series.is_some_and(|s| !s.is_null()) {
            debug!("series is not an array, history is empty");
        }
        return History::empty();
    };

    let observations = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match parse_entry(entry) {
            Ok(observation) => Some(observation),
            Err(e) => {
                debug!(index, error = %e, "series entry dropped");
                None
            }
        })
        .collect();

    History::from_unsorted(observations)
}

/// Parse one series entry. Only an unusable date rejects the entry.
pub fn parse_entry(entry: &Value) -> Result<Observation, ParseError> {
    let Value::Object(fields) = entry else {
        return Err(ParseError::UnexpectedType {
            field: "entry",
            found: json_type(entry).to_string(),
        });
    };

    let date = parse_date(fields.get("date"))?;
    let value = parse_value(fields.get("value")).unwrap_or_else(|e| {
        debug!(%date, error = %e, "value coerced to 0.0");
        0.0
    });

    Ok(Observation::new(date, value))
}

/// Parse an ISO calendar date, or the date part of an ISO timestamp.
pub fn parse_date(raw: Option<&Value>) -> Result<NaiveDate, ParseError> {
    let text = match raw {
        None | Some(Value::Null) => return Err(ParseError::Missing("date")),
        Some(Value::String(text)) => text.as_str(),
        Some(other) => {
            return Err(ParseError::UnexpectedType {
                field: "date",
                found: json_type(other).to_string(),
            })
        }
    };

    if !has_iso_shape(text) {
        return Err(ParseError::InvalidDate(text.to_string()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(timestamp.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|timestamp| timestamp.date())
        .ok_or_else(|| ParseError::InvalidDate(text.to_string()))
}

/// Coerce a JSON value into a finite number. An absent value reads as zero.
pub fn parse_value(raw: Option<&Value>) -> Result<f64, ParseError> {
    let number = match raw {
        None => 0.0,
        Some(Value::Number(n)) => n.as_f64().ok_or(ParseError::NonFinite)?,
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber(text.clone()))?,
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(Value::Null) => return Err(ParseError::Missing("value")),
        Some(other) => {
            return Err(ParseError::UnexpectedType {
                field: "value",
                found: json_type(other).to_string(),
            })
        }
    };

    if number.is_finite() {
        Ok(number)
    } else {
        Err(ParseError::NonFinite)
    }
}

/// Coerce a JSON value into an integer, truncating floats toward zero.
///
/// Falsy values (`null`, `0`, `false`, `""`) are errors, so the caller falls
/// back to its default.
pub fn parse_integer(raw: Option<&Value>, field: &'static str) -> Result<i64, ParseError> {
    match raw {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(ParseError::Missing(field)),
        Some(Value::Bool(true)) => Ok(1),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(0), _) => Err(ParseError::Missing(field)),
            (Some(i), _) => Ok(i),
            (None, Some(f)) if f == 0.0 => Err(ParseError::Missing(field)),
            (None, Some(f)) if f.is_finite() && f.abs() < i64::MAX as f64 => Ok(f.trunc() as i64),
            _ => Err(ParseError::CountOutOfRange(n.to_string())),
        },
        Some(Value::String(text)) if text.trim().is_empty() => Err(ParseError::Missing(field)),
        Some(Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidNumber(text.clone())),
        Some(other) => Err(ParseError::UnexpectedType {
            field,
            found: json_type(other).to_string(),
        }),
    }
}

/// Coerce a JSON value into a positive count.
///
/// Anything [`parse_integer`] rejects, and any non-positive result, is an
/// error.
pub fn parse_count(raw: Option<&Value>, field: &'static str) -> Result<usize, ParseError> {
    let count = parse_integer(raw, field)?;
    if count <= 0 {
        return Err(ParseError::CountOutOfRange(count.to_string()));
    }
    usize::try_from(count).map_err(|_| ParseError::CountOutOfRange(count.to_string()))
}

/// Coerce a JSON value into a cycle length floored at 1.
///
/// Only values [`parse_integer`] rejects are errors; `-3` reads as 1.
pub fn parse_period(raw: Option<&Value>, field: &'static str) -> Result<usize, ParseError> {
    let period = parse_integer(raw, field)?.max(1);
    usize::try_from(period).map_err(|_| ParseError::CountOutOfRange(period.to_string()))
}

/// `YYYY-MM-DD`, optionally followed by `T` or a space and `HH:MM`.
fn has_iso_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    let digits = |range: std::ops::Range<usize>| {
        bytes
            .get(range)
            .is_some_and(|chunk| chunk.iter().all(u8::is_ascii_digit))
    };
    let byte_is = |index: usize, expected: u8| bytes.get(index) == Some(&expected);

    let date = digits(0..4) && byte_is(4, b'-') && digits(5..7) && byte_is(7, b'-') && digits(8..10);
    if !date {
        return false;
    }
    bytes.len() == 10
        || ((byte_is(10, b'T') || byte_is(10, b' '))
            && digits(11..13)
            && byte_is(13, b':')
            && digits(14..16))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
