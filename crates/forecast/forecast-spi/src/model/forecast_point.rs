//! Forecast point model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One future period with its central value and confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    /// Central (baseline) value
    pub value: f64,
    /// Lower bound of the band
    pub lower: f64,
    /// Upper bound of the band
    pub upper: f64,
}

impl ForecastPoint {
    /// Point with a symmetric band of half-width `interval` around `value`.
    pub fn symmetric(date: NaiveDate, value: f64, interval: f64) -> Self {
        Self {
            date,
            value,
            lower: value - interval,
            upper: value + interval,
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}
