//! Anomaly types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Severity tiers of a flagged point.
///
/// Points scoring below the warning threshold are never reported, so there is
/// no variant for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalySeverity {
    Warning,
    High,
}

impl AnomalySeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalySeverity::Warning => "warning",
            AnomalySeverity::High => "high",
        }
    }
}

impl std::fmt::Display for AnomalySeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a point was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// Point deviates from the trailing-window baseline.
    UnexpectedTrendMovement,
}

/// Structured detector output, before any text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub date: NaiveDate,
    pub value: f64,
    /// Deviation from the local baseline in units of the noise level
    pub score: f64,
    pub severity: AnomalySeverity,
    pub kind: AnomalyKind,
}

/// Anomaly as it appears in the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub date: NaiveDate,
    pub value: f64,
    pub score: f64,
    pub severity: AnomalySeverity,
    pub description: String,
}

impl AnomalyRecord {
    /// Attach a rendered description.
    pub fn with_description(self, description: impl Into<String>) -> Anomaly {
        Anomaly {
            date: self.date,
            value: self.value,
            score: self.score,
            severity: self.severity,
            description: description.into(),
        }
    }
}
