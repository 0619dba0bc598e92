//! Output documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Anomaly, ForecastPoint, History, Recommendation, ScenarioReport, Stats};

/// Result of one forecast run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDocument {
    /// Forecast points, one per horizon step
    pub baseline: Vec<ForecastPoint>,
    /// Parsed and sorted input series
    pub history: History,
    pub stats: Stats,
    pub anomalies: Vec<Anomaly>,
}

/// Forecast document extended with scenario projections and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDocument {
    #[serde(flatten)]
    pub forecast: ForecastDocument,
    /// The selected scenario
    pub scenario: ScenarioReport,
    /// Every known scenario keyed by name, the selected one included
    pub scenarios: BTreeMap<String, ScenarioReport>,
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_top_level_keys() {
        let document = ForecastDocument {
            baseline: vec![],
            history: History::empty(),
            stats: Stats::default(),
            anomalies: vec![],
        };
        let json = serde_json::to_value(&document).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["anomalies", "baseline", "history", "stats"]);
    }

    #[test]
    fn test_scenario_document_flattens_forecast() {
        let report = ScenarioReport {
            name: "optimistic".to_string(),
            label: "Optimistic".to_string(),
            series: vec![],
            summary: Default::default(),
        };
        let document = ScenarioDocument {
            forecast: ForecastDocument {
                baseline: vec![],
                history: History::empty(),
                stats: Stats::default(),
                anomalies: vec![],
            },
            scenario: report.clone(),
            scenarios: BTreeMap::from([(report.name.clone(), report)]),
            recommendations: vec![],
        };
        let json = serde_json::to_value(&document).unwrap();

        assert!(json.get("baseline").is_some());
        assert!(json.get("stats").is_some());
        assert_eq!(json["scenario"]["name"], "optimistic");
        assert!(json["scenarios"].get("optimistic").is_some());
    }
}
