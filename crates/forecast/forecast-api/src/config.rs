//! Engine configuration.

use forecast_spi::{ForecastError, Result};
use serde::{Deserialize, Serialize};

use crate::Locale;

/// Default number of forecast periods.
pub const DEFAULT_HORIZON: usize = 14;
/// Default seasonal cycle length.
pub const DEFAULT_SEASONALITY: usize = 7;

/// Rolling-window anomaly detection settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyConfig {
    /// Absolute score above which a point is reported as a warning
    pub warning_threshold: f64,
    /// Absolute score above which a point is reported as high severity
    pub high_threshold: f64,
    /// Smallest trailing window, also the minimum history length scanned
    pub min_window: usize,
    /// Largest trailing window
    pub max_window: usize,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            warning_threshold: 1.5,
            high_threshold: 2.5,
            min_window: 3,
            max_window: 7,
        }
    }
}

impl AnomalyConfig {
    /// Window length used for a history of `len` observations.
    pub fn window_for(&self, len: usize) -> usize {
        len.min(self.max_window).max(self.min_window)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.warning_threshold.is_finite() && self.warning_threshold > 0.0) {
            return Err(ForecastError::invalid(
                "warning_threshold",
                "must be a positive number",
            ));
        }
        if !(self.high_threshold.is_finite() && self.high_threshold >= self.warning_threshold) {
            return Err(ForecastError::invalid(
                "high_threshold",
                "must not be below warning_threshold",
            ));
        }
        if self.min_window == 0 {
            return Err(ForecastError::invalid("min_window", "must be at least 1"));
        }
        if self.max_window < self.min_window {
            return Err(ForecastError::invalid(
                "max_window",
                "must not be below min_window",
            ));
        }
        Ok(())
    }
}

/// Ledger-to-series aggregation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Zero-valued days prepended before the first record
    pub lookback_days: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self { lookback_days: 14 }
    }
}

/// Configuration of a forecast run.
///
/// `horizon` and `seasonality` act as defaults; an input document may
/// override them per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Number of future periods to forecast
    pub horizon: usize,
    /// Seasonal cycle length in periods
    pub seasonality: usize,
    /// Weight of the same-phase historical value in the seasonal blend
    pub seasonal_weight: f64,
    /// Half-width of the confidence band in units of the noise level
    pub interval_multiplier: f64,
    pub anomaly: AnomalyConfig,
    /// Language of rendered descriptions
    pub locale: Locale,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            seasonality: DEFAULT_SEASONALITY,
            seasonal_weight: 0.4,
            interval_multiplier: 1.28,
            anomaly: AnomalyConfig::default(),
            locale: Locale::default(),
        }
    }
}

impl ForecastConfig {
    pub fn builder() -> ForecastConfigBuilder {
        ForecastConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<()> {
        if self.seasonality == 0 {
            return Err(ForecastError::invalid("seasonality", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.seasonal_weight) {
            return Err(ForecastError::invalid(
                "seasonal_weight",
                "must be between 0 and 1",
            ));
        }
        if !(self.interval_multiplier.is_finite() && self.interval_multiplier >= 0.0) {
            return Err(ForecastError::invalid(
                "interval_multiplier",
                "must be a non-negative number",
            ));
        }
        self.anomaly.validate()
    }
}

/// Builder for [`ForecastConfig`].
#[derive(Debug, Clone, Default)]
pub struct ForecastConfigBuilder {
    config: ForecastConfig,
}

impl ForecastConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizon(mut self, horizon: usize) -> Self {
        self.config.horizon = horizon;
        self
    }

    pub fn seasonality(mut self, seasonality: usize) -> Self {
        self.config.seasonality = seasonality;
        self
    }

    pub fn seasonal_weight(mut self, weight: f64) -> Self {
        self.config.seasonal_weight = weight;
        self
    }

    pub fn interval_multiplier(mut self, multiplier: f64) -> Self {
        self.config.interval_multiplier = multiplier;
        self
    }

    pub fn anomaly(mut self, anomaly: AnomalyConfig) -> Self {
        self.config.anomaly = anomaly;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<ForecastConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
