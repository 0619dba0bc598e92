//! Advisory cards derived from a forecast.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tone of a recommendation card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceSeverity {
    Positive,
    Info,
    Warning,
    Critical,
}

/// Structured advice, rendered to text by a [`crate::Localizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advice {
    /// Projection ends above where it starts
    PositiveTrend { change: f64 },
    /// Projection ends below where it starts
    NegativeTrendRisk { change: f64 },
    RisingVolatility,
    /// Historical slope is negative
    DownwardTrend,
    /// At least one high-severity anomaly; carries the first one
    AnomalyAlarm { date: NaiveDate, value: f64 },
    /// Only warning-level anomalies
    SensitiveDays,
    StableOutlook,
}

impl Advice {
    pub fn severity(&self) -> AdviceSeverity {
        match self {
            Advice::PositiveTrend { .. } => AdviceSeverity::Positive,
            Advice::NegativeTrendRisk { .. } | Advice::RisingVolatility => AdviceSeverity::Warning,
            Advice::DownwardTrend | Advice::AnomalyAlarm { .. } => AdviceSeverity::Critical,
            Advice::SensitiveDays | Advice::StableOutlook => AdviceSeverity::Info,
        }
    }
}

/// Rendered recommendation card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub severity: AdviceSeverity,
    pub description: String,
}
