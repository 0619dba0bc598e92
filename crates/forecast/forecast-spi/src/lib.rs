//! Forecast Service Provider Interface
//!
//! Defines the data model, error types and the traits implemented by the
//! trend, noise, anomaly and localization stages of the forecast engine.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{AnomalyDetector, Localizer, NoiseEstimator, TrendEstimator};
pub use error::{ForecastError, ParseError, Result};
pub use model::{
    Advice, AdviceSeverity, Anomaly, AnomalyKind, AnomalyRecord, AnomalySeverity, Direction,
    ForecastDocument, ForecastPoint, ForecastRequest, History, LedgerRecord, Observation,
    Recommendation, ScenarioDocument, ScenarioPoint, ScenarioReport, ScenarioSummary, Stats,
    Trend,
};
