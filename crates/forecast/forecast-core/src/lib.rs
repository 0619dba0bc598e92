//! Forecast Core
//!
//! Core implementations of the forecast engine: input parsing, trend and
//! noise estimation, seasonal blending, forecast generation, rolling-window
//! anomaly detection, response assembly, and the scenario, recommendation
//! and ledger layers built on top of them.

pub mod anomaly;
pub mod assembler;
pub mod confidence;
pub mod descriptive;
pub mod engine;
pub mod generator;
pub mod ledger;
pub mod localization;
pub mod noise;
pub mod parser;
pub mod recommendation;
pub mod scenario;
pub mod seasonality;
pub mod trend;

// Re-export SPI traits for implementations
pub use forecast_spi::{AnomalyDetector, Localizer, NoiseEstimator, TrendEstimator};

// Re-export main types
pub use anomaly::RollingWindowDetector;
pub use confidence::SymmetricBand;
pub use engine::ForecastEngine;
pub use generator::{ForecastGenerator, ForecastOutcome};
pub use localization::Catalog;
pub use noise::{NoiseCascade, NoiseEstimate};
pub use seasonality::SeasonalBlender;
pub use trend::LeastSquaresTrend;
