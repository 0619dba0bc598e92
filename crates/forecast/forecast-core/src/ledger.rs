//! Ledger aggregation
//!
//! Turns raw cash movements into a dense daily net series, the shape the
//! forecast expects as input.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use forecast_api::LedgerConfig;
use forecast_spi::{Direction, History, LedgerRecord, Observation, ParseError};
use serde_json::Value;
use tracing::debug;

use crate::parser::{parse_date, parse_value};

/// Date fields consulted in order; the first parseable one wins.
const DATE_FIELDS: [&str; 3] = ["dueDate", "date", "createdAt"];

/// Parse one raw ledger record.
pub fn parse_ledger_record(entry: &Value) -> Result<LedgerRecord, ParseError> {
    let Value::Object(fields) = entry else {
        return Err(ParseError::UnexpectedType {
            field: "record",
            found: "non-object".to_string(),
        });
    };

    let date = DATE_FIELDS
        .iter()
        .find_map(|key| parse_date(fields.get(*key)).ok())
        .ok_or(ParseError::Missing("date"))?;
    let amount = parse_value(fields.get("amount")).unwrap_or(0.0);
    let direction = match fields
        .get("type")
        .or_else(|| fields.get("direction"))
        .and_then(Value::as_str)
    {
        Some(kind) if kind.eq_ignore_ascii_case("outgoing") => Direction::Outgoing,
        _ => Direction::Incoming,
    };

    Ok(LedgerRecord::new(date, amount, direction))
}

/// Parse a JSON array of ledger records, or an object holding one under
/// `records`. Unusable records are dropped.
pub fn parse_ledger(input: &Value) -> Vec<LedgerRecord> {
    let entries = match input {
        Value::Array(entries) => entries,
        Value::Object(map) => match map.get("records") {
            Some(Value::Array(entries)) => entries,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match parse_ledger_record(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(index, error = %e, "ledger record dropped");
                None
            }
        })
        .collect()
}

/// Sum signed amounts per day over a continuous date range.
///
/// The range starts `lookback_days` before the earliest record and ends on
/// the latest one; days without records hold `0.0`.
pub fn aggregate_daily(records: &[LedgerRecord], config: &LedgerConfig) -> History {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.date).or_insert(0.0) += record.signed_amount();
    }

    let (Some(first), Some(last)) = (
        totals.keys().next().copied(),
        totals.keys().next_back().copied(),
    ) else {
        return History::empty();
    };

    let start = first
        .checked_sub_days(Days::new(u64::from(config.lookback_days)))
        .unwrap_or(first);

    let observations: Vec<Observation> = start
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| Observation::new(day, totals.get(&day).copied().unwrap_or(0.0)))
        .collect();

    debug!(
        records = records.len(),
        days = observations.len(),
        "ledger aggregated"
    );
    History::from_unsorted(observations)
}
