//! Observation and history types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated value of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Chronologically ordered observations.
///
/// The ordering is established on construction with a stable sort, so
/// observations sharing a date keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Observation>", into = "Vec<Observation>")]
pub struct History {
    observations: Vec<Observation>,
}

impl History {
    /// Build a history from observations in any order.
    pub fn from_unsorted(mut observations: Vec<Observation>) -> Self {
        observations.sort_by_key(|observation| observation.date);
        Self { observations }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// The numeric values in chronological order.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Most recent observation, if any.
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }
}

impl From<Vec<Observation>> for History {
    fn from(observations: Vec<Observation>) -> Self {
        Self::from_unsorted(observations)
    }
}

impl From<History> for Vec<Observation> {
    fn from(history: History) -> Self {
        history.observations
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_history_sorts_by_date() {
        let history = History::from_unsorted(vec![
            Observation::new(day(3), 3.0),
            Observation::new(day(1), 1.0),
            Observation::new(day(2), 2.0),
        ]);

        assert_eq!(history.values(), vec![1.0, 2.0, 3.0]);
        assert_eq!(history.last().unwrap().date, day(3));
    }

    #[test]
    fn test_history_ties_keep_input_order() {
        let history = History::from_unsorted(vec![
            Observation::new(day(2), 20.0),
            Observation::new(day(1), 10.0),
            Observation::new(day(2), 21.0),
            Observation::new(day(2), 22.0),
        ]);

        assert_eq!(history.values(), vec![10.0, 20.0, 21.0, 22.0]);
    }

    #[test]
    fn test_history_serializes_as_plain_array() {
        let history = History::from_unsorted(vec![Observation::new(day(5), 4.5)]);
        let json = serde_json::to_value(&history).unwrap();

        assert_eq!(json, serde_json::json!([{ "date": "2024-03-05", "value": 4.5 }]));
    }

    #[test]
    fn test_history_deserialization_restores_order() {
        let json = serde_json::json!([
            { "date": "2024-03-09", "value": 9.0 },
            { "date": "2024-03-01", "value": 1.0 }
        ]);
        let history: History = serde_json::from_value(json).unwrap();

        assert_eq!(history.values(), vec![1.0, 9.0]);
    }

    #[test]
    fn test_empty_history() {
        let history = History::empty();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.last().is_none());
        assert!(history.values().is_empty());
    }
}
