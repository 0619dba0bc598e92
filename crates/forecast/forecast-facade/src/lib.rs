//! Forecast Facade
//!
//! High-level API for the forecast engine. Re-exports all public types from
//! the forecast stack and offers one-call entry points over raw documents.
//!
//! ```no_run
//! let output = forecast_facade::forecast(br#"{"series": [{"date": "2024-01-01", "value": 3}]}"#);
//! println!("{}", output.baseline.len());
//! ```

// Re-export everything from API (which includes the SPI error types)
pub use forecast_api::*;

// Re-export core modules for direct access
pub use forecast_core::{
    anomaly, assembler, confidence, descriptive, engine, generator, ledger, localization, noise,
    parser, recommendation, scenario, seasonality, trend,
};

// Re-export main core types at root
pub use forecast_core::{
    Catalog, ForecastEngine, ForecastGenerator, ForecastOutcome, LeastSquaresTrend,
    NoiseCascade, NoiseEstimate, RollingWindowDetector, SeasonalBlender, SymmetricBand,
};

// Re-export SPI models and traits
pub use forecast_spi::{
    Advice, AdviceSeverity, Anomaly, AnomalyDetector, AnomalyKind, AnomalyRecord,
    AnomalySeverity, Direction, ForecastDocument, ForecastPoint, ForecastRequest, History,
    LedgerRecord, Localizer, NoiseEstimator, Observation, Recommendation, ScenarioDocument,
    ScenarioPoint, ScenarioReport, ScenarioSummary, Stats, Trend, TrendEstimator,
};

/// Forecast a raw input document with the default configuration.
pub fn forecast(input: &[u8]) -> ForecastDocument {
    ForecastEngine::default().run_bytes(input)
}

/// Aggregate a JSON ledger into a forecast input document.
pub fn ledger_to_document(ledger: &serde_json::Value, config: &LedgerConfig) -> serde_json::Value {
    let records = forecast_core::ledger::parse_ledger(ledger);
    let history = forecast_core::ledger::aggregate_daily(&records, config);
    serde_json::json!({ "series": history })
}
