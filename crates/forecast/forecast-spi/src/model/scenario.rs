//! Scenario projection types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A forecast point adjusted by a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
    /// Unadjusted baseline value of the same period
    pub baseline: f64,
}

/// Aggregate view of a projected scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub total: f64,
    pub average_daily: f64,
    /// Last value minus first value
    pub change: f64,
    pub last_value: f64,
}

/// Named scenario with its projected series and summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub name: String,
    pub label: String,
    pub series: Vec<ScenarioPoint>,
    pub summary: ScenarioSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_field_names() {
        let json = serde_json::to_value(ScenarioSummary::default()).unwrap();
        assert!(json.get("averageDaily").is_some());
        assert!(json.get("lastValue").is_some());
        assert!(json.get("total").is_some());
        assert!(json.get("change").is_some());
    }
}
