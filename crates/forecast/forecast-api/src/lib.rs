//! Forecast Consumer API
//!
//! Configuration types and builders for the forecast engine.
//!
//! This crate provides:
//! - `ForecastConfig` and its builder, with validation
//! - Anomaly detection and ledger aggregation settings
//! - Output locales and the built-in what-if scenarios
//! - Re-exports from the SPI for convenience

mod config;
mod locale;
mod scenario;

pub use config::{
    AnomalyConfig, ForecastConfig, ForecastConfigBuilder, LedgerConfig, DEFAULT_HORIZON,
    DEFAULT_SEASONALITY,
};
pub use locale::Locale;
pub use scenario::Scenario;

// Re-export SPI types
pub use forecast_spi::{ForecastError, ParseError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AnomalyConfig, ForecastConfig, ForecastConfigBuilder, LedgerConfig, Locale, Scenario,
    };
    pub use forecast_spi::{
        Anomaly, AnomalySeverity, ForecastDocument, ForecastError, ForecastPoint, History,
        Observation, Result, ScenarioDocument, Stats,
    };
}
